//! JSON output formatting for agenda.

use serde::Serialize;
use serde_json::json;

use crate::core::Task;
use crate::error::AgendaError;
use crate::storage::LineError;

/// Format ranked tasks as JSON
///
/// # Errors
///
/// Returns `AgendaError::Json` if JSON serialization fails.
pub fn format_tasks_json(
    ranked: &[(usize, &Task)],
    skipped: &[LineError],
) -> Result<String, AgendaError> {
    let items: Vec<_> = ranked
        .iter()
        .map(|(index, task)| task_entry(*index, task))
        .collect();
    let output = json!({
        "count": ranked.len(),
        "items": items,
        "skipped": skipped,
    });
    to_json(&output)
}

/// One task with its index and stored line.
pub fn task_entry(index: usize, task: &Task) -> serde_json::Value {
    json!({
        "index": index,
        "line": task.to_string(),
        "task": task,
    })
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `AgendaError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, AgendaError> {
    Ok(serde_json::to_string_pretty(value)?)
}
