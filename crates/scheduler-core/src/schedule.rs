//! Task-level date handling built on top of [`crate::recurrence`].

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{CompletionResult, Task};
use crate::recurrence::{next_date, RepeatRule};

/// Normalizes the date a task is stored under.
///
/// # Behavior
/// - empty `date` becomes `today`
/// - a date before `today` becomes `today` for one-off tasks, or the next
///   occurrence after `today` for repeating ones
/// - `today` or later is kept as given
/// - a non-empty `repeat` is always validated, even when the date is kept
pub fn resolve_task_date(today: NaiveDate, date: &str, repeat: &str) -> Result<String, CoreError> {
    let repeat = repeat.trim();
    if !repeat.is_empty() {
        RepeatRule::parse(repeat)?;
    }

    if date.is_empty() {
        return Ok(format_date(today));
    }

    let parsed = parse_date(date).ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
    if parsed >= today {
        return Ok(date.to_string());
    }

    if repeat.is_empty() {
        debug!(%date, %today, "past one-off task moved to today");
        Ok(format_date(today))
    } else {
        let next = next_date(today, date, repeat)?;
        debug!(%date, %next, repeat, "past repeating task moved to next occurrence");
        Ok(next)
    }
}

/// Checks a task before it is stored and returns it with its date resolved.
pub fn prepare_task(today: NaiveDate, mut task: Task) -> Result<Task, CoreError> {
    if task.title.trim().is_empty() {
        return Err(CoreError::EmptyTitle);
    }
    task.date = resolve_task_date(today, &task.date, &task.repeat)?;
    Ok(task)
}

/// Decides what marking `task` done means on `today`.
pub fn complete_task(today: NaiveDate, task: &Task) -> Result<CompletionResult, CoreError> {
    if !task.is_repeating() {
        return Ok(CompletionResult::Remove);
    }
    let date = next_date(today, &task.date, task.repeat.trim())?;
    Ok(CompletionResult::Reschedule { date })
}
