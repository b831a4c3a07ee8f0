//! Compact repeat rules and next-date calculation.
//!
//! A repeat rule is `<kind> [days] [months]`:
//!
//! | rule        | meaning                                         |
//! |-------------|-------------------------------------------------|
//! | `y`         | every year on the start date                    |
//! | `d 3`       | every 3 days from the start date                |
//! | `w 1,3`     | every Monday and Wednesday (1 = Monday)         |
//! | `m 1,-1`    | the first and last day of every month           |
//! | `m 15 3,9`  | the 15th of March and September                 |

mod advance;
mod rule;

use chrono::NaiveDate;

use crate::calendar::{format_date, parse_date};
use crate::error::NextDateError;

pub use advance::{next_occurrence, SearchLimits};
pub use rule::{
    RawRepeatRule, RepeatKind, RepeatRule, MAX_DAY_INTERVAL, MAX_DAY_OF_MONTH,
    MIN_MONTH_END_OFFSET,
};

/// Next date of `repeat` from `start`, strictly after `now`, as `YYYYMMDD`.
///
/// The rule is parsed and validated before `start` is read, so a bad rule is
/// reported even when the start date is also malformed.
pub fn next_date(now: NaiveDate, start: &str, repeat: &str) -> Result<String, NextDateError> {
    next_date_with(now, start, repeat, &SearchLimits::default())
}

pub fn next_date_with(
    now: NaiveDate,
    start: &str,
    repeat: &str,
    limits: &SearchLimits,
) -> Result<String, NextDateError> {
    let rule = RepeatRule::parse(repeat)?;
    let start = parse_start(start)?;
    next_occurrence(&rule, start, now, limits).map(format_date)
}

/// The next `count` occurrences after `now`, each one searched for from the
/// previous result.
pub fn upcoming(
    now: NaiveDate,
    start: &str,
    repeat: &str,
    count: usize,
    limits: &SearchLimits,
) -> Result<Vec<NaiveDate>, NextDateError> {
    let rule = RepeatRule::parse(repeat)?;
    let start = parse_start(start)?;

    let mut dates = Vec::with_capacity(count);
    let mut after = now;
    for _ in 0..count {
        after = next_occurrence(&rule, start, after, limits)?;
        dates.push(after);
    }
    Ok(dates)
}

fn parse_start(start: &str) -> Result<NaiveDate, NextDateError> {
    parse_date(start).ok_or_else(|| NextDateError::InvalidStartDate(start.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, RuleError, ValidationError};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_date_formats_result() {
        assert_eq!(next_date(ymd(2024, 1, 10), "20240101", "y").unwrap(), "20250101");
    }

    #[test]
    fn test_rule_errors_come_first() {
        let err = next_date(ymd(2024, 1, 1), "garbage", "x 1").unwrap_err();
        assert_eq!(
            err,
            NextDateError::Rule(RuleError::Invalid(ValidationError::InvalidKind("x".into())))
        );
    }

    #[test]
    fn test_invalid_start_date() {
        let err = next_date(ymd(2024, 1, 1), "2024-01-01", "d 1").unwrap_err();
        assert_eq!(err, NextDateError::InvalidStartDate("2024-01-01".to_string()));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = next_date(ymd(2024, 1, 1), "20240101", "d x").unwrap_err();
        assert_eq!(
            err,
            NextDateError::Rule(RuleError::Parse(ParseError::InvalidFormat("x".into())))
        );
    }

    #[test]
    fn test_upcoming_chains_results() {
        let dates = upcoming(ymd(2024, 1, 1), "20240101", "m 1,-1", 4, &SearchLimits::default())
            .unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 31), ymd(2024, 2, 1), ymd(2024, 2, 29), ymd(2024, 3, 1)]
        );
    }

    #[test]
    fn test_upcoming_zero() {
        let dates = upcoming(ymd(2024, 1, 1), "20240101", "y", 0, &SearchLimits::default());
        assert_eq!(dates, Ok(vec![]));
    }
}
