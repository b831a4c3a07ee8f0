use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, RuleError, ValidationError};

/// Largest step accepted by a `d` rule.
pub const MAX_DAY_INTERVAL: i32 = 400;
/// Largest day magnitude accepted by every other rule kind.
pub const MAX_DAY_OF_MONTH: i32 = 31;
/// Monthly rules may count back from the end of the month this far.
pub const MIN_MONTH_END_OFFSET: i32 = -2;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatKind {
    Yearly,
    Daily,
    Weekly,
    Monthly,
}

impl RepeatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatKind::Yearly => "y",
            RepeatKind::Daily => "d",
            RepeatKind::Weekly => "w",
            RepeatKind::Monthly => "m",
        }
    }
}

impl FromStr for RepeatKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" => Ok(RepeatKind::Yearly),
            "d" => Ok(RepeatKind::Daily),
            "w" => Ok(RepeatKind::Weekly),
            "m" => Ok(RepeatKind::Monthly),
            _ => Err(ValidationError::InvalidKind(s.to_string())),
        }
    }
}

impl fmt::Display for RepeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenized rule text that has not been checked yet.
///
/// The kind selector is kept verbatim so that an unknown letter is reported by
/// [`RawRepeatRule::validate`] rather than by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRepeatRule {
    pub kind: String,
    pub days: Vec<i32>,
    pub months: Vec<i32>,
}

impl RawRepeatRule {
    /// Splits `<kind> [days] [months]` on single spaces.
    ///
    /// Both lists come back sorted ascending. Tokens after the month list are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let mut tokens = text.split(' ');
        let kind = tokens.next().unwrap_or_default().to_string();
        let days = tokens.next().map(parse_list).transpose()?.unwrap_or_default();
        let months = tokens.next().map(parse_list).transpose()?.unwrap_or_default();

        Ok(Self { kind, days, months })
    }

    /// Applies the range checks for the rule's kind, in a fixed order, and
    /// returns the first violation.
    pub fn validate(self) -> Result<RepeatRule, ValidationError> {
        let kind: RepeatKind = self.kind.parse()?;

        if kind != RepeatKind::Yearly && self.days.is_empty() {
            return Err(ValidationError::MissingDays);
        }

        if kind == RepeatKind::Daily {
            if let Some(&day) = self.days.iter().find(|&&d| d > MAX_DAY_INTERVAL) {
                return Err(ValidationError::IntervalTooLarge(day));
            }
            if let Some(&day) = self.days.iter().find(|&&d| d < 1) {
                return Err(ValidationError::InvalidInterval(day));
            }
        } else if let Some(&day) = self.days.iter().find(|d| d.abs() > MAX_DAY_OF_MONTH) {
            return Err(ValidationError::InvalidDayOfMonth(day));
        }

        if kind == RepeatKind::Weekly {
            if let Some(&day) = self.days.iter().find(|&&d| !(1..=7).contains(&d)) {
                return Err(ValidationError::InvalidDayOfWeek(day));
            }
        }

        if kind == RepeatKind::Monthly {
            if let Some(&day) = self.days.iter().find(|&&d| d < MIN_MONTH_END_OFFSET) {
                return Err(ValidationError::InvalidDayOfMonth(day));
            }
        }

        if let Some(&month) = self.months.iter().find(|&&m| !(1..=12).contains(&m)) {
            return Err(ValidationError::InvalidMonth(month));
        }

        Ok(RepeatRule {
            kind,
            days: self.days,
            months: self.months,
        })
    }
}

fn parse_list(token: &str) -> Result<Vec<i32>, ParseError> {
    let mut values = token
        .split(',')
        .map(|v| {
            v.parse::<i32>()
                .map_err(|_| ParseError::InvalidFormat(v.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    values.sort_unstable();
    Ok(values)
}

/// A validated repeat rule.
///
/// `days` holds the interval for [`RepeatKind::Daily`], ISO weekdays for
/// [`RepeatKind::Weekly`] and days of the month (negative ones counting back
/// from the month end) for [`RepeatKind::Monthly`]. An empty `months` list
/// means every month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatRule {
    kind: RepeatKind,
    days: Vec<i32>,
    months: Vec<i32>,
}

impl RepeatRule {
    /// Tokenizes and validates `text` in one step.
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        Ok(RawRepeatRule::parse(text)?.validate()?)
    }

    pub fn kind(&self) -> RepeatKind {
        self.kind
    }

    pub fn days(&self) -> &[i32] {
        &self.days
    }

    pub fn months(&self) -> &[i32] {
        &self.months
    }

    /// Days that can never produce a date: negative days of a monthly rule
    /// restricted to listed months.
    pub fn unreachable_days(&self) -> Vec<i32> {
        if self.kind != RepeatKind::Monthly || self.months.is_empty() {
            return Vec::new();
        }
        self.days.iter().copied().filter(|&d| d < 0).collect()
    }

    /// English rendering of the rule, e.g. "every week on Monday and Wednesday".
    pub fn describe(&self) -> String {
        match self.kind {
            RepeatKind::Yearly => "every year on the same date".to_string(),
            RepeatKind::Daily => match self.days[0] {
                1 => "every day".to_string(),
                n => format!("every {n} days"),
            },
            RepeatKind::Weekly => {
                let names: Vec<String> = self
                    .days
                    .iter()
                    .map(|&d| WEEKDAY_NAMES[(d - 1) as usize].to_string())
                    .collect();
                format!("every week on {}", join_words(&names))
            }
            RepeatKind::Monthly => {
                let days: Vec<String> = self.days.iter().map(|&d| describe_day(d)).collect();
                let months = if self.months.is_empty() {
                    "every month".to_string()
                } else {
                    let names: Vec<String> = self
                        .months
                        .iter()
                        .map(|&m| MONTH_NAMES[(m - 1) as usize].to_string())
                        .collect();
                    join_words(&names)
                };
                format!("on {} of {}", join_words(&days), months)
            }
        }
    }
}

fn describe_day(day: i32) -> String {
    match day {
        -1 => "the last day".to_string(),
        -2 => "the day before last".to_string(),
        d => format!("day {d}"),
    }
}

fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn join_numbers(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl FromStr for RepeatRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical rule text: sorted lists, single spaces.
impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.days.is_empty() {
            write!(f, " {}", join_numbers(&self.days))?;
        }
        if !self.months.is_empty() {
            write!(f, " {}", join_numbers(&self.months))?;
        }
        Ok(())
    }
}
