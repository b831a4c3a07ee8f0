use chrono::NaiveDate;
use thiserror::Error;

/// Failure to split a repeat rule into its tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("repeat rule is empty")]
    Empty,

    #[error("repeat rule has invalid format: '{0}' is not an integer")]
    InvalidFormat(String),
}

/// A repeat rule that parsed but does not describe a usable schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown repeat kind '{0}', expected one of y, d, w, m")]
    InvalidKind(String),

    #[error("repeat rule requires a list of days")]
    MissingDays,

    #[error("day interval {0} exceeds the maximum of 400")]
    IntervalTooLarge(i32),

    #[error("day interval {0} must be at least 1")]
    InvalidInterval(i32),

    #[error("invalid day of the month: {0}")]
    InvalidDayOfMonth(i32),

    #[error("invalid day of the week: {0}")]
    InvalidDayOfWeek(i32),

    #[error("invalid month: {0}")]
    InvalidMonth(i32),
}

/// Either half of turning rule text into a validated rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NextDateError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("invalid start date: '{0}', expected YYYYMMDD")]
    InvalidStartDate(String),

    #[error("no occurrence found on or before {horizon}")]
    NoOccurrence { horizon: NaiveDate },
}

impl From<ParseError> for NextDateError {
    fn from(err: ParseError) -> Self {
        NextDateError::Rule(err.into())
    }
}

impl From<ValidationError> for NextDateError {
    fn from(err: ValidationError) -> Self {
        NextDateError::Rule(err.into())
    }
}

/// Errors raised while preparing or completing a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("task title is empty")]
    EmptyTitle,

    #[error("invalid task date: '{0}', expected YYYYMMDD")]
    InvalidDate(String),

    #[error(transparent)]
    NextDate(#[from] NextDateError),
}

impl From<RuleError> for CoreError {
    fn from(err: RuleError) -> Self {
        CoreError::NextDate(err.into())
    }
}
