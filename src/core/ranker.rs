//! Display ordering for tasks.
//!
//! Tasks with a priority come first, ordered by letter. Within the same
//! priority (or among tasks without one) earlier dates come first, then
//! earlier times. Missing dates and times sort last. Ties keep load order.

use std::cmp::Ordering;

use super::task::{Task, TaskDate, TaskTime};

/// Sorts last: stands in for a missing time (`9999`).
pub const MISSING_TIME_KEY: (u8, u8) = (99, 99);

/// Sorts last: stands in for a missing date (30/12/2200).
pub const MISSING_DATE_KEY: (u16, u8, u8) = (2200, 12, 30);

fn date_key(date: Option<TaskDate>) -> (u16, u8, u8) {
    date.map_or(MISSING_DATE_KEY, |d| d.sort_key())
}

fn time_key(time: Option<TaskTime>) -> (u8, u8) {
    time.map_or(MISSING_TIME_KEY, |t| t.sort_key())
}

/// Composite display order of two tasks.
#[must_use]
pub fn compare(a: &Task, b: &Task) -> Ordering {
    let priority = match (a.priority(), b.priority()) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    priority
        .then_with(|| date_key(a.date()).cmp(&date_key(b.date())))
        .then_with(|| time_key(a.time()).cmp(&time_key(b.time())))
}

/// Order tasks for display.
///
/// Returns `(index, task)` pairs where `index` is the 1-based position in
/// the input, so a displayed task can always be addressed by its load
/// position. The input is left untouched.
#[must_use]
pub fn rank(tasks: &[Task]) -> Vec<(usize, &Task)> {
    let mut ranked: Vec<(usize, &Task)> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| (i + 1, task))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| compare(a, b));
    ranked
}

/// Order arbitrary entries that carry a task, keeping their own identifiers.
///
/// `sort_by` is stable, so entries that compare equal keep their input order.
pub fn rank_by<T>(entries: &mut [T], task_of: impl Fn(&T) -> &Task) {
    entries.sort_by(|a, b| compare(task_of(a), task_of(b)));
}
