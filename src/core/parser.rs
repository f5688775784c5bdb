//! Line parser for stored tasks.
//!
//! A line is a whitespace-separated sequence of tokens:
//!
//! ```text
//! [DDMMYYYY] [HHMM] [(X)] description words... [@context] [+project]
//! ```
//!
//! The optional leading tokens are tried once each, in that order, and only
//! consumed when they match their grammar. The trailing tags are then tried
//! from the end, project first. Anything left over is the description. A
//! token that fails its grammar stays in the description.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::task::{Priority, Task, TaskDate, TaskTime};
use crate::error::AgendaError;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{4})$")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})$").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Za-z])\)$").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

/// Match a `DDMMYYYY` token with a valid day for its month.
#[must_use]
pub fn parse_date(token: &str) -> Option<TaskDate> {
    let caps = DATE_PATTERN.captures(token)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    TaskDate::new(day, month, year)
}

/// Match an `HHMM` token on a 24-hour clock.
#[must_use]
pub fn parse_time(token: &str) -> Option<TaskTime> {
    let caps = TIME_PATTERN.captures(token)?;
    TaskTime::new(caps[1].parse().ok()?, caps[2].parse().ok()?)
}

/// Match a `(X)` token; the letter is case-insensitive.
#[must_use]
pub fn parse_priority(token: &str) -> Option<Priority> {
    let caps = PRIORITY_PATTERN.captures(token)?;
    caps[1].chars().next().and_then(Priority::new)
}

/// `+` followed by at least one character.
#[must_use]
pub fn is_project(token: &str) -> bool {
    token.strip_prefix('+').is_some_and(|rest| !rest.is_empty())
}

/// `@` followed by at least one character.
#[must_use]
pub fn is_context(token: &str) -> bool {
    token.strip_prefix('@').is_some_and(|rest| !rest.is_empty())
}

/// Parse one raw line into a task.
///
/// # Errors
///
/// Returns `MissingDescription` if nothing is left once the optional fields
/// have been consumed, including for blank lines.
pub fn parse_line(line: &str) -> Result<Task, AgendaError> {
    let mut tokens: VecDeque<&str> = line.split_whitespace().collect();

    let date = take_front(&mut tokens, parse_date);
    let time = take_front(&mut tokens, parse_time);
    let priority = take_front(&mut tokens, parse_priority);
    let project = take_back(&mut tokens, is_project);
    let context = take_back(&mut tokens, is_context);

    let description = tokens.into_iter().collect::<Vec<_>>().join(" ");
    let mut task = Task::new(description)?;

    if let Some(date) = date {
        task = task.with_date(date);
    }
    if let Some(time) = time {
        task = task.with_time(time);
    }
    if let Some(priority) = priority {
        task = task.with_priority(priority);
    }
    if let Some(context) = context {
        task = task.with_context(context);
    }
    if let Some(project) = project {
        task = task.with_project(project);
    }

    Ok(task)
}

fn take_front<T>(tokens: &mut VecDeque<&str>, grammar: impl Fn(&str) -> Option<T>) -> Option<T> {
    let value = grammar(tokens.front()?)?;
    tokens.pop_front();
    Some(value)
}

fn take_back<'a>(tokens: &mut VecDeque<&'a str>, grammar: impl Fn(&str) -> bool) -> Option<&'a str> {
    if grammar(tokens.back()?) {
        tokens.pop_back()
    } else {
        None
    }
}

impl FromStr for Task {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Writes the storage line: date, time, priority, description, context and
/// project, single-space separated, skipping absent fields.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(date) = self.date() {
            write!(f, "{date} ")?;
        }
        if let Some(time) = self.time() {
            write!(f, "{time} ")?;
        }
        if let Some(priority) = self.priority() {
            write!(f, "{priority} ")?;
        }
        f.write_str(self.description())?;
        if let Some(context) = self.context() {
            write!(f, " {context}")?;
        }
        if let Some(project) = self.project() {
            write!(f, " {project}")?;
        }
        Ok(())
    }
}
