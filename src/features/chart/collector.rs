//! Completion counts per day from the archive.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::core::Task;
use crate::error::AgendaError;

/// Longest supported window, about ten years.
pub const MAX_CHART_DAYS: u32 = 3660;

/// Archived tasks dated on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// The `days` calendar days before `today`, oldest first. Today is excluded.
///
/// # Errors
///
/// Returns `InvalidDays` if `days` exceeds [`MAX_CHART_DAYS`] or the window
/// starts before the earliest representable date.
pub fn trailing_window(today: NaiveDate, days: u32) -> Result<Vec<NaiveDate>, AgendaError> {
    let invalid = || AgendaError::InvalidDays {
        days,
        max: MAX_CHART_DAYS,
    };
    if days > MAX_CHART_DAYS {
        return Err(invalid());
    }
    (1..=u64::from(days))
        .rev()
        .map(|back| today.checked_sub_days(Days::new(back)).ok_or_else(invalid))
        .collect()
}

/// Count archived tasks by their date over the trailing window.
///
/// Undated tasks and tasks dated outside the window are not counted.
///
/// # Errors
///
/// Returns `InvalidDays` if the window cannot be built.
pub fn completions_by_day(
    archived: &[Task],
    today: NaiveDate,
    days: u32,
) -> Result<Vec<DayCount>, AgendaError> {
    Ok(trailing_window(today, days)?
        .into_iter()
        .map(|date| DayCount {
            date,
            count: archived
                .iter()
                .filter(|task| task.date().is_some_and(|d| d.is_on(date)))
                .count(),
        })
        .collect())
}
