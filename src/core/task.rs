//! The task value type and its typed fields.
//!
//! Every field writes back the token it was parsed from (priorities are
//! uppercased), so a parsed task serializes to an equivalent line.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::AgendaError;

/// A calendar date written as `DDMMYYYY`.
///
/// Day limits are month-specific (31, 30, or 29 for February). Leap years
/// are not checked, so `29022023` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskDate {
    day: u8,
    month: u8,
    year: u16,
}

impl TaskDate {
    /// Build a date from its components, validating the ranges.
    #[must_use]
    pub fn new(day: u8, month: u8, year: u16) -> Option<Self> {
        let max_day = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => return None,
        };
        if year == 0 || year > 9999 || day == 0 || day > max_day {
            return None;
        }
        Some(Self { day, month, year })
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Chronological ordering key.
    #[must_use]
    pub const fn sort_key(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Whether this date falls on the given calendar day.
    #[must_use]
    pub fn is_on(&self, date: NaiveDate) -> bool {
        i32::from(self.year) == date.year()
            && u32::from(self.month) == date.month()
            && u32::from(self.day) == date.day()
    }
}

impl From<NaiveDate> for TaskDate {
    fn from(date: NaiveDate) -> Self {
        // chrono dates are always valid; only the year range can fall outside
        // four digits, which is clamped.
        Self {
            day: date.day() as u8,
            month: date.month() as u8,
            year: date.year().clamp(1, 9999) as u16,
        }
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:04}", self.day, self.month, self.year)
    }
}

/// A 24-hour time of day written as `HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskTime {
    hour: u8,
    minute: u8,
}

impl TaskTime {
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Ordering key; equivalent to comparing the `HHMM` text.
    #[must_use]
    pub const fn sort_key(&self) -> (u8, u8) {
        (self.hour, self.minute)
    }
}

impl fmt::Display for TaskTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// A priority letter, written as `(X)`. Always stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(char);

impl Priority {
    /// Build a priority from a letter, normalizing it to uppercase.
    #[must_use]
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Self(letter.to_ascii_uppercase()))
    }

    /// Parse a priority argument given as a bare letter, e.g. `b`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPriorityLetter` unless the input is exactly one ASCII letter.
    pub fn from_letter(input: &str) -> Result<Self, AgendaError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::new(c).ok_or_else(|| AgendaError::InvalidPriorityLetter(input.to_string()))
            },
            _ => Err(AgendaError::InvalidPriorityLetter(input.to_string())),
        }
    }

    #[must_use]
    pub const fn letter(&self) -> char {
        self.0
    }

    /// The display band for this priority, if it has one.
    #[must_use]
    pub const fn band(&self) -> Option<PriorityBand> {
        match self.0 {
            'A' => Some(PriorityBand::A),
            'B' => Some(PriorityBand::B),
            'C' => Some(PriorityBand::C),
            'D' => Some(PriorityBand::D),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0)
    }
}

/// The four priorities that carry a display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    A,
    B,
    C,
    D,
}

/// A single task. Immutable once built; the description is never empty.
///
/// Tasks are built by [`parse_line`](crate::core::parse_line), which keeps
/// every field in the position and form it serializes to. Only the priority
/// can be replaced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<TaskDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<TaskTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

impl Task {
    /// Create a task with only a description.
    ///
    /// # Errors
    ///
    /// Returns `MissingDescription` if the description is blank.
    pub(super) fn new(description: impl Into<String>) -> Result<Self, AgendaError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(AgendaError::MissingDescription);
        }
        Ok(Self {
            date: None,
            time: None,
            priority: None,
            description,
            context: None,
            project: None,
        })
    }

    #[must_use]
    pub(super) fn with_date(mut self, date: TaskDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub(super) fn with_time(mut self, time: TaskTime) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Attach a context tag (`@name`).
    #[must_use]
    pub(super) fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach a project tag (`+name`).
    #[must_use]
    pub(super) fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    #[must_use]
    pub const fn date(&self) -> Option<TaskDate> {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> Option<TaskTime> {
        self.time
    }

    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

/// Serializes a field through its `Display` form, e.g. `"01032024"`.
fn collect_display<T: fmt::Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

impl Serialize for TaskDate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        collect_display(self, s)
    }
}

impl Serialize for TaskTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        collect_display(self, s)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        collect_display(self, s)
    }
}
