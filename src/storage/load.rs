//! Loading a store into tasks.

use serde::Serialize;
use tracing::warn;

use crate::config::InvalidLinePolicy;
use crate::core::{parse_line, Task};
use crate::error::AgendaError;

use super::LineStore;

/// A stored line that did not parse and was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineError {
    /// 1-based line number in the store.
    pub line: usize,
    /// The raw line.
    pub text: String,
    /// Why it was rejected.
    pub reason: String,
}

/// The parsed contents of a store.
#[derive(Debug, Clone, Default)]
pub struct LoadedTasks {
    /// Tasks paired with their 1-based line number.
    pub tasks: Vec<(usize, Task)>,
    /// Lines that failed to parse (only under [`InvalidLinePolicy::Skip`]).
    pub skipped: Vec<LineError>,
}

impl LoadedTasks {
    /// Parse raw lines, numbering them from 1.
    ///
    /// # Errors
    ///
    /// With [`InvalidLinePolicy::Abort`], returns `InvalidLine` for the first
    /// line that fails to parse.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        policy: InvalidLinePolicy,
    ) -> Result<Self, AgendaError> {
        let mut loaded = Self::default();

        for (i, raw) in lines.iter().enumerate() {
            let line = i + 1;
            match parse_line(raw.as_ref()) {
                Ok(task) => loaded.tasks.push((line, task)),
                Err(e) => match policy {
                    InvalidLinePolicy::Abort => {
                        return Err(AgendaError::InvalidLine {
                            line,
                            source: Box::new(e),
                        })
                    },
                    InvalidLinePolicy::Skip => {
                        warn!(line, error = %e, "skipping invalid line");
                        loaded.skipped.push(LineError {
                            line,
                            text: raw.as_ref().to_string(),
                            reason: e.to_string(),
                        });
                    },
                },
            }
        }

        Ok(loaded)
    }
}

/// Read and parse every line of a store.
///
/// # Errors
///
/// Returns `StorageUnavailable` if the store cannot be read, or
/// `InvalidLine` under [`InvalidLinePolicy::Abort`].
pub fn load_tasks(
    store: &dyn LineStore,
    policy: InvalidLinePolicy,
) -> Result<LoadedTasks, AgendaError> {
    let lines = store.read_lines()?;
    LoadedTasks::from_lines(&lines, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 4] = ["(A) First", "", "01032024 Second", "+Orphan"];

    #[test]
    fn test_skip_keeps_line_numbers() {
        let loaded = LoadedTasks::from_lines(&LINES, InvalidLinePolicy::Skip).unwrap();

        let numbers: Vec<usize> = loaded.tasks.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].line, 2);
        assert_eq!(loaded.skipped[1].line, 4);
        assert_eq!(loaded.skipped[1].text, "+Orphan");
        assert_eq!(loaded.skipped[1].reason, "invalid task: missing description");
    }

    #[test]
    fn test_abort_reports_first_bad_line() {
        let err = LoadedTasks::from_lines(&LINES, InvalidLinePolicy::Abort).unwrap_err();
        match err {
            AgendaError::InvalidLine { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, AgendaError::MissingDescription));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_store() {
        let mut store = crate::storage::MockLineStore::new();
        store
            .expect_read_lines()
            .returning(|| Ok(vec!["Buy milk @Shop".to_string()]));

        let loaded = load_tasks(&store, InvalidLinePolicy::Abort).unwrap();
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[0].1.context(), Some("@Shop"));
        assert!(loaded.skipped.is_empty());
    }
}
