//! Path resolution for agenda configuration and data files.
//!
//! All agenda data is stored in `~/.agenda/`:
//! - `config.yaml` - Main configuration file
//! - `todo.txt` - Active tasks, one per line
//! - `done.txt` - Completed tasks, one per line

use std::path::PathBuf;

use crate::error::AgendaError;

/// Paths to agenda configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.agenda/`
    pub root: PathBuf,
    /// Config file: `~/.agenda/config.yaml`
    pub config_file: PathBuf,
    /// Active store: `~/.agenda/todo.txt`
    pub todo_file: PathBuf,
    /// Archive store: `~/.agenda/done.txt`
    pub archive_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AgendaError> {
        let home = std::env::var("HOME")
            .map_err(|_| AgendaError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".agenda")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            todo_file: root.join("todo.txt"),
            archive_file: root.join("done.txt"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".agenda"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-agenda");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.todo_file, root.join("todo.txt"));
        assert_eq!(paths.archive_file, root.join("done.txt"));
    }
}
