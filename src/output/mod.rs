//! Output formatting for agenda.
//!
//! This module provides the presenters for ranked tasks in the supported
//! output formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::ThemeConfig;
use crate::core::Task;
use crate::error::AgendaError;
use crate::storage::LineError;

pub use json::*;
pub use pretty::*;

/// Format ranked tasks based on output format
///
/// # Errors
///
/// Returns `AgendaError::Json` if JSON serialization fails.
pub fn format_tasks(
    ranked: &[(usize, &Task)],
    skipped: &[LineError],
    title: &str,
    theme: &ThemeConfig,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(ranked, skipped, title, theme)),
        OutputFormat::Json => format_tasks_json(ranked, skipped),
    }
}
