//! Add command implementation.
//!
//! This module implements `agenda add`: parse the text as a task line and
//! append it to the active store.

use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::core::parse_line;
use crate::error::AgendaError;
use crate::output::to_json;
use crate::storage::LineStore;

/// Execute the add command.
///
/// # Errors
///
/// Returns `MissingDescription` if the text has no description, or
/// `StorageUnavailable` if the active store cannot be written.
pub fn add(store: &dyn LineStore, text: &str, format: OutputFormat) -> Result<String, AgendaError> {
    let task = parse_line(text)?;
    let line = task.to_string();
    store.append_line(&line)?;

    info!(path = %store.location().display(), %line, "added task");

    match format {
        OutputFormat::Json => {
            let output = json!({
                "added": true,
                "line": line,
                "task": task,
            });
            to_json(&output)
        },
        OutputFormat::Pretty => Ok(format!("{} {line}", "Added:".green().bold())),
    }
}
