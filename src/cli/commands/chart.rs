//! Chart command implementation.
//!
//! Renders archived tasks per day over a trailing window.

use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::AgendaError;
use crate::features::chart::{completions_by_day, render_completion_chart};
use crate::output::{format_skipped_pretty, to_json};
use crate::storage::{load_tasks, LineStore};

/// Execute the chart command for the `days` days before `today`.
///
/// # Errors
///
/// Returns `InvalidDays` for a window that is too long, or an error if the
/// archive cannot be read or, with the `abort` policy, contains an invalid
/// line.
pub fn chart(
    archive: &dyn LineStore,
    config: &Config,
    days: u32,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, AgendaError> {
    let loaded = load_tasks(archive, config.storage.on_invalid_line)?;
    let tasks: Vec<_> = loaded.tasks.into_iter().map(|(_, task)| task).collect();
    let counts = completions_by_day(&tasks, today, days)?;

    debug!(days, archived = tasks.len(), "charting completions");

    match format {
        OutputFormat::Json => {
            let output = json!({
                "days": days,
                "total": counts.iter().map(|c| c.count).sum::<usize>(),
                "counts": counts,
                "skipped": loaded.skipped,
            });
            to_json(&output)
        },
        OutputFormat::Pretty => {
            let mut output = render_completion_chart(&counts, config.chart.bar_width);
            if !loaded.skipped.is_empty() {
                output.push('\n');
                output.push_str(&format_skipped_pretty(&loaded.skipped));
            }
            Ok(output)
        },
    }
}
