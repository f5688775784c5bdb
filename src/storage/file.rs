//! Line-oriented task stores.
//!
//! The active store (`todo.txt`) and the archive store (`done.txt`) are both
//! plain text files with one task per line.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AgendaError;

/// A persistent, ordered sequence of raw task lines.
#[cfg_attr(test, mockall::automock)]
pub trait LineStore {
    /// Where the store lives, for messages.
    fn location(&self) -> PathBuf;

    /// Read every line in order, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be read.
    fn read_lines(&self) -> Result<Vec<String>, AgendaError>;

    /// Append one line to the end of the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be written.
    fn append_line(&self, line: &str) -> Result<(), AgendaError>;

    /// Replace the whole store with `lines`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be written.
    fn write_lines(&self, lines: &[String]) -> Result<(), AgendaError>;
}

/// A store backed by a text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), AgendaError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(|e| AgendaError::storage(dir, e))
            },
            _ => Ok(()),
        }
    }

    /// Whether the existing file lacks a final newline.
    fn needs_separator(&self) -> Result<bool, AgendaError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes.last().is_some_and(|b| *b != b'\n')),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AgendaError::storage(&self.path, e)),
        }
    }
}

impl LineStore for FileStore {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>, AgendaError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let lines: Vec<String> = contents.lines().map(str::to_string).collect();
                debug!(path = %self.path.display(), count = lines.len(), "read store");
                Ok(lines)
            },
            // A store that was never written is empty.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store missing, treating as empty");
                Ok(Vec::new())
            },
            Err(e) => Err(AgendaError::storage(&self.path, e)),
        }
    }

    fn append_line(&self, line: &str) -> Result<(), AgendaError> {
        self.ensure_parent()?;
        let separator = if self.needs_separator()? { "\n" } else { "" };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AgendaError::storage(&self.path, e))?;
        writeln!(file, "{separator}{line}").map_err(|e| AgendaError::storage(&self.path, e))?;

        debug!(path = %self.path.display(), "appended line");
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), AgendaError> {
        self.ensure_parent()?;
        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|e| AgendaError::storage(&self.path, e))?;

        debug!(path = %self.path.display(), count = lines.len(), "rewrote store");
        Ok(())
    }
}
