//! Due-date validation and deadline classification.
//!
//! All functions take the reference time as an explicit parameter so tests
//! can pin it; only the menu binary reaches for the wall clock.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::entities::Task;
use crate::errors::{TaskdeckError, TaskdeckResult};

/// Exact format every due date must use
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How many days ahead a due date counts as "nearing its deadline"
pub const DEFAULT_DEADLINE_WINDOW_DAYS: i64 = 3;

/// Parse a due-date string to midnight of that day
fn parse_due_date(date_str: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Check that a due-date string parses and has not already passed.
///
/// The parsed date-only value (midnight) is compared against the full
/// date-time `now`, so a due date of "today" stops validating as soon as any
/// time past midnight has elapsed. That asymmetry is part of the contract.
pub fn validate(date_str: &str, now: NaiveDateTime) -> TaskdeckResult<()> {
    let due = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
        TaskdeckError::InvalidDueDate {
            input: date_str.to_string(),
        }
    })?;

    if due.and_time(NaiveTime::MIN) < now {
        return Err(TaskdeckError::DueDatePassed {
            input: date_str.to_string(),
        });
    }

    Ok(())
}

/// True when the due date lies strictly in the past. Unparseable dates are
/// never delayed (fails open).
pub fn is_delayed(due_date: &str, now: NaiveDateTime) -> bool {
    parse_due_date(due_date).is_some_and(|due| due < now)
}

/// True when the due date falls within `[now, now + threshold_days]`,
/// inclusive on both ends. Unparseable dates never qualify.
pub fn is_nearing_deadline(due_date: &str, now: NaiveDateTime, threshold_days: i64) -> bool {
    let Some(due) = parse_due_date(due_date) else {
        return false;
    };
    let threshold = now + Duration::days(threshold_days);
    now <= due && due <= threshold
}

/// Incomplete tasks whose due date has already passed
pub fn delayed_tasks(tasks: &[Task], now: NaiveDateTime) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && is_delayed(&t.due_date, now))
        .cloned()
        .collect()
}

/// Incomplete tasks due within the deadline window
pub fn nearing_tasks(tasks: &[Task], now: NaiveDateTime, threshold_days: i64) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && is_nearing_deadline(&t.due_date, now, threshold_days))
        .cloned()
        .collect()
}
