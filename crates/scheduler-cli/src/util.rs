use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use scheduler_core::calendar::parse_date;

/// Reads a `--now` value, falling back to the local calendar date.
pub fn resolve_now(now: Option<&str>) -> Result<NaiveDate> {
    match now {
        None => Ok(Local::now().date_naive()),
        Some(value) => parse_date(value)
            .ok_or_else(|| anyhow!("--now must be a YYYYMMDD date, got '{}'", value)),
    }
}

/// Rejects a blank repeat rule and trims the rest.
pub fn require_repeat(repeat: &str) -> Result<&str> {
    let repeat = repeat.trim();
    if repeat.is_empty() {
        return Err(anyhow!("--repeat is required and must not be blank"));
    }
    Ok(repeat)
}
