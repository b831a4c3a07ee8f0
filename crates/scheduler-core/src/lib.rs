//! # Scheduler Core Library
//!
//! Date logic for a task scheduler: compact repeat rules, their validation,
//! and the search for a repeating task's next date.
//!
//! ## Features
//!
//! - **Compact Repeat Rules**: `y`, `d <n>`, `w <weekdays>`, `m <days> [months]`
//!   with negative days counting back from the end of the month
//! - **Typed Errors**: every parse and validation failure is its own variant
//! - **Pure Calculation**: no clock, no I/O, no shared state; `now` is always
//!   passed in, so every call is safe to run from any thread
//! - **Bounded Search**: scans stop at a configurable horizon instead of
//!   looping on rules that can never match
//!
//! ## Core Modules
//!
//! - [`recurrence`]: rule parsing, validation and next-date search
//! - [`calendar`]: month boundaries, weekday arithmetic, `YYYYMMDD` format
//! - [`schedule`]: task date normalization and completion
//! - [`models`]: task and completion data structures
//! - [`error`]: error types for every failure mode
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use scheduler_core::recurrence::next_date;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! // February has no 31st, so it is skipped
//! assert_eq!(next_date(now, "20240101", "m 31").unwrap(), "20240331");
//! ```

pub mod calendar;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod schedule;
