//! Command implementations for agenda.
//!
//! Every command is a complete load-modify-save cycle against the stores it
//! is given. Task numbers are 1-based line numbers in the active store.

mod add;
mod chart;
mod shell;

pub use add::add;
pub use chart::chart;
pub use shell::completions;

use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::{parse_line, rank_by, Priority, Task};
use crate::error::AgendaError;
use crate::output::{format_tasks, task_entry, to_json};
use crate::storage::{load_tasks, LineStore};

/// Convert a task number argument.
///
/// Numbers too large for `usize` saturate, so they fail the range check
/// like any other task number past the end.
///
/// # Errors
///
/// Returns `InvalidIndexArgument` unless the argument is all digits.
pub fn parse_index(arg: &str) -> Result<usize, AgendaError> {
    let arg = arg.trim();
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AgendaError::InvalidIndexArgument(arg.to_string()));
    }
    Ok(arg.parse().unwrap_or(usize::MAX))
}

/// Check that `index` addresses one of `count` lines.
fn check_index(index: usize, count: usize) -> Result<usize, AgendaError> {
    if index == 0 || index > count {
        return Err(AgendaError::InvalidIndex { index, count });
    }
    Ok(index - 1)
}

/// Parse the line at `index`, reporting a line that no longer parses.
fn task_at(lines: &[String], index: usize) -> Result<Task, AgendaError> {
    let pos = check_index(index, lines.len())?;
    parse_line(&lines[pos]).map_err(|_| AgendaError::CorruptEntry {
        index,
        line: lines[pos].clone(),
    })
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the active store cannot be read, if it contains an
/// invalid line under the `abort` policy, or if output formatting fails.
pub fn list(
    store: &dyn LineStore,
    config: &Config,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    let loaded = load_tasks(store, config.storage.on_invalid_line)?;

    let mut entries = loaded.tasks;
    rank_by(&mut entries, |(_, task)| task);
    let ranked: Vec<(usize, &Task)> = entries.iter().map(|(line, task)| (*line, task)).collect();

    format_tasks(&ranked, &loaded.skipped, "Tasks", &config.theme, format)
}

/// Execute the remove command
///
/// The line is dropped as stored, without parsing it.
///
/// # Errors
///
/// Returns `InvalidIndexArgument` or `InvalidIndex` for a bad task number,
/// or `StorageUnavailable` if the store cannot be read or written.
pub fn remove(
    store: &dyn LineStore,
    index: &str,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    let index = parse_index(index)?;
    let mut lines = store.read_lines()?;
    let pos = check_index(index, lines.len())?;

    let removed = lines.remove(pos);
    store.write_lines(&lines)?;

    info!(index, line = %removed, "removed task");

    match format {
        OutputFormat::Json => to_json(&json!({
            "removed": { "index": index, "line": removed },
        })),
        OutputFormat::Pretty => Ok(format!("{} {index} {removed}", "Removed:".red().bold())),
    }
}

/// Execute the done command
///
/// Appends the task to the archive, then removes it from the active store.
/// If the archive cannot be written the active store is left unchanged.
///
/// # Errors
///
/// Returns `InvalidIndexArgument` or `InvalidIndex` for a bad task number,
/// `CorruptEntry` if the addressed line does not parse, or
/// `StorageUnavailable` if either store cannot be read or written.
pub fn done(
    active: &dyn LineStore,
    archive: &dyn LineStore,
    index: &str,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    let index = parse_index(index)?;
    let mut lines = active.read_lines()?;
    let task = task_at(&lines, index)?;

    archive.append_line(&task.to_string())?;
    lines.remove(index - 1);
    active.write_lines(&lines)?;

    info!(index, line = %task, "completed task");

    match format {
        OutputFormat::Json => to_json(&json!({
            "completed": task_entry(index, &task),
        })),
        OutputFormat::Pretty => Ok(format!("{} {index} {task}", "Completed:".green().bold())),
    }
}

/// Execute the prioritize command
///
/// # Errors
///
/// Returns `InvalidIndexArgument`, `InvalidPriorityLetter`, `InvalidIndex`,
/// `CorruptEntry`, or `StorageUnavailable`.
pub fn prioritize(
    store: &dyn LineStore,
    index: &str,
    letter: &str,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    let index = parse_index(index)?;
    let priority = Priority::from_letter(letter)?;
    let mut lines = store.read_lines()?;

    let task = task_at(&lines, index)?.with_priority(priority);
    lines[index - 1] = task.to_string();
    store.write_lines(&lines)?;

    info!(index, line = %task, "changed priority");

    match format {
        OutputFormat::Json => to_json(&json!({
            "updated": task_entry(index, &task),
        })),
        OutputFormat::Pretty => Ok(format!("{} {index} {task}", "Updated:".yellow().bold())),
    }
}
