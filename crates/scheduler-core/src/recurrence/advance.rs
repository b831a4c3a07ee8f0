use std::iter;

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::{debug, trace, warn};

use super::rule::{RepeatKind, RepeatRule};
use crate::calendar::{
    days_until_weekday, first_day_of_month, last_day_of_month, last_day_of_next_month,
};
use crate::error::NextDateError;

/// How far past the later of `start` and `now` a search may run.
///
/// Applies to every rule kind, including `d` rules whose next date is computed
/// without a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub horizon_years: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { horizon_years: 10 }
    }
}

impl SearchLimits {
    /// Last date a scan may examine.
    pub fn horizon(&self, start: NaiveDate, now: NaiveDate) -> NaiveDate {
        let latest = start.max(now);
        latest
            .checked_add_months(Months::new(self.horizon_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Finds the first date produced by `rule` from `start` that is strictly after
/// `now`.
///
/// # Behavior
/// - `y`: one year at a time is added to the previous date; Feb 29 rolls
///   over to Mar 1 in a common year and the series continues from there
/// - `d`: `start + k * interval` for the smallest `k >= 1` past `now`
/// - `w`: the earliest listed weekday after `now`, walking weeks from `start`
/// - `m`: listed days of every month, or of the listed months only; days that
///   do not exist in a month are skipped, never rolled over
///
/// Returns [`NextDateError::NoOccurrence`] when nothing qualifies before the
/// search horizon.
pub fn next_occurrence(
    rule: &RepeatRule,
    start: NaiveDate,
    now: NaiveDate,
    limits: &SearchLimits,
) -> Result<NaiveDate, NextDateError> {
    let horizon = limits.horizon(start, now);
    debug!(rule = %rule, %start, %now, %horizon, "computing next occurrence");

    let next = match rule.kind() {
        RepeatKind::Yearly => next_yearly(start, now, horizon),
        RepeatKind::Daily => next_daily(start, now, rule.days()[0], horizon),
        RepeatKind::Weekly => next_weekly(start, now, rule.days(), horizon),
        RepeatKind::Monthly if rule.months().is_empty() => {
            next_monthly_any(start, now, rule.days(), horizon)
        }
        RepeatKind::Monthly => next_monthly_in(start, now, rule.days(), rule.months(), horizon),
    };

    match next {
        Some(date) => {
            debug!(%date, "next occurrence found");
            Ok(date)
        }
        None => {
            warn!(rule = %rule, %horizon, "no occurrence before search horizon");
            Err(NextDateError::NoOccurrence { horizon })
        }
    }
}

/// Same month and day one year later; a day the month lacks overflows into
/// the next month (Feb 29 becomes Mar 1).
fn add_year(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year().checked_add(1)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        let first = NaiveDate::from_ymd_opt(year, date.month(), 1)?;
        let overflow = date.day() - last_day_of_month(first).day();
        last_day_of_month(first).checked_add_days(Days::new(u64::from(overflow)))
    })
}

fn next_yearly(start: NaiveDate, now: NaiveDate, horizon: NaiveDate) -> Option<NaiveDate> {
    iter::successors(add_year(start), |date| add_year(*date))
        .take_while(|date| *date <= horizon)
        .find(|date| *date > now)
}

fn next_daily(
    start: NaiveDate,
    now: NaiveDate,
    interval: i32,
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    let step = i64::from(interval);
    let elapsed = (now - start).num_days();
    let steps = if elapsed < 0 { 1 } else { elapsed / step + 1 };
    let offset = u64::try_from(steps.checked_mul(step)?).ok()?;
    start
        .checked_add_days(Days::new(offset))
        .filter(|date| *date <= horizon)
}

fn next_weekly(
    start: NaiveDate,
    now: NaiveDate,
    weekdays: &[i32],
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    // Weeks that end before `now` cannot contain a match.
    let mut week = start;
    if now > start {
        let skipped = (now - start).num_days() / 7 * 7;
        week = start.checked_add_days(Days::new(u64::try_from(skipped).ok()?))?;
    }

    while week <= horizon {
        let mut offsets: Vec<u32> = weekdays
            .iter()
            .filter_map(|&w| u32::try_from(w).ok())
            .map(|w| days_until_weekday(week, w))
            .collect();
        offsets.sort_unstable();

        let found = offsets
            .into_iter()
            .filter_map(|offset| week.checked_add_days(Days::new(u64::from(offset))))
            .find(|date| *date > now);
        if found.is_some() {
            return found;
        }

        trace!(%week, "no weekday match, advancing a week");
        week = week.checked_add_days(Days::new(7))?;
    }
    None
}

/// First of every month from the month holding `from` through `horizon`.
fn month_starts(from: NaiveDate, horizon: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(first_day_of_month(from)), |first| {
        first.checked_add_months(Months::new(1))
    })
    .take_while(move |first| *first <= horizon)
}

/// Day `day` of the month starting at `first`, if the month has one.
fn day_of_month(first: NaiveDate, day: i32) -> Option<NaiveDate> {
    let offset = u64::try_from(day.checked_sub(1)?).ok()?;
    first
        .checked_add_days(Days::new(offset))
        .filter(|date| i64::from(date.day()) == i64::from(day))
}

fn next_monthly_positive(
    from: NaiveDate,
    now: NaiveDate,
    days: &[i32],
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    month_starts(from, horizon).find_map(|first| {
        days.iter()
            .filter_map(|&day| day_of_month(first, day))
            .find(|date| *date > now)
    })
}

fn next_monthly_negative(
    from: NaiveDate,
    now: NaiveDate,
    days: &[i32],
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    iter::successors(Some(last_day_of_month(from)), |last| {
        Some(last_day_of_next_month(*last))
    })
    .take_while(|last| first_day_of_month(*last) <= horizon)
    .find_map(|last| {
        days.iter()
            .filter_map(|&day| {
                let back = u64::try_from(day.checked_add(1)?.checked_neg()?).ok()?;
                last.checked_sub_days(Days::new(back))
            })
            .find(|date| *date > now)
    })
}

fn next_monthly_any(
    start: NaiveDate,
    now: NaiveDate,
    days: &[i32],
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    // Months before the one holding `now` cannot contain a match.
    let from = start.max(now);
    let (negative, positive): (Vec<i32>, Vec<i32>) = days.iter().copied().partition(|&d| d < 0);

    match (positive.is_empty(), negative.is_empty()) {
        (false, true) => next_monthly_positive(from, now, &positive, horizon),
        (true, false) => next_monthly_negative(from, now, &negative, horizon),
        _ => {
            let by_day = next_monthly_positive(from, now, &positive, horizon);
            let from_end = next_monthly_negative(from, now, &negative, horizon);
            by_day.into_iter().chain(from_end).min()
        }
    }
}

fn next_monthly_in(
    start: NaiveDate,
    now: NaiveDate,
    days: &[i32],
    months: &[i32],
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    month_starts(start.max(now), horizon)
        .filter(|first| months.iter().any(|&m| i64::from(m) == i64::from(first.month())))
        .find_map(|first| {
            days.iter()
                .filter_map(|&day| day_of_month(first, day))
                .find(|date| *date > now)
        })
}
