//! Error types for agenda.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by parsing, ranking, storage and the command layer.
#[derive(Debug, Error)]
pub enum AgendaError {
    /// A line parsed down to an empty description.
    #[error("invalid task: missing description")]
    MissingDescription,

    /// A task number outside `[1, count]`.
    #[error("invalid task number {index}: choose a task between 1 and {count}")]
    InvalidIndex { index: usize, count: usize },

    /// A priority that is not a single letter.
    #[error("invalid priority {0:?}: expected a single letter")]
    InvalidPriorityLetter(String),

    /// A task number argument that is not numeric.
    #[error("invalid task number {0:?}: expected a number")]
    InvalidIndexArgument(String),

    /// A chart window longer than supported.
    #[error("invalid chart range {days}: choose between 0 and {max} days")]
    InvalidDays { days: u32, max: u32 },

    /// The line addressed by a task number no longer parses as a task.
    #[error("task {index} is corrupt and cannot be modified: {line:?}")]
    CorruptEntry { index: usize, line: String },

    /// A stored line failed to parse while loading a whole store.
    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<AgendaError>,
    },

    /// The underlying store could not be read or written.
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgendaError {
    /// Wrap an I/O failure against the store at `path`.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = AgendaError::InvalidIndex { index: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "invalid task number 7: choose a task between 1 and 3"
        );
    }

    #[test]
    fn test_invalid_days_message() {
        let err = AgendaError::InvalidDays { days: 5000, max: 3660 };
        assert_eq!(
            err.to_string(),
            "invalid chart range 5000: choose between 0 and 3660 days"
        );
    }

    #[test]
    fn test_invalid_line_wraps_source() {
        let err = AgendaError::InvalidLine {
            line: 4,
            source: Box::new(AgendaError::MissingDescription),
        };
        assert_eq!(err.to_string(), "line 4: invalid task: missing description");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_storage_message_includes_path() {
        let err = AgendaError::storage(
            "/nowhere/todo.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/todo.txt"));
        assert!(msg.contains("denied"));
    }
}
