use colored::{ColoredString, Colorize};

use crate::config::ThemeConfig;
use crate::core::{PriorityBand, Task};
use crate::storage::LineError;

/// Apply the theme style for a priority band to a line of text.
pub fn style_for_band(text: &str, band: Option<PriorityBand>, theme: &ThemeConfig) -> ColoredString {
    match band {
        Some(PriorityBand::A) => {
            let styled = text.color(theme.band_a.as_str());
            if theme.bold_band_a {
                styled.bold()
            } else {
                styled
            }
        },
        Some(PriorityBand::B) => text.color(theme.band_b.as_str()),
        Some(PriorityBand::C) => text.color(theme.band_c.as_str()),
        Some(PriorityBand::D) => text.color(theme.band_d.as_str()),
        None => text.normal(),
    }
}

/// Format a single ranked task as `<index> <line>`, styled by priority.
pub fn format_task_pretty(index: usize, task: &Task, theme: &ThemeConfig) -> String {
    let text = format!("{index} {task}");
    let band = task.priority().and_then(|p| p.band());
    style_for_band(&text, band, theme).to_string()
}

/// Format ranked tasks as a list with a header.
pub fn format_tasks_pretty(
    ranked: &[(usize, &Task)],
    skipped: &[LineError],
    title: &str,
    theme: &ThemeConfig,
) -> String {
    let mut output = if ranked.is_empty() {
        format!("{title} (0 items)\n  No tasks\n")
    } else {
        let mut output = format!("{} ({} items)\n", title, ranked.len());
        output.push_str(&"─".repeat(60));
        output.push('\n');
        for (index, task) in ranked {
            output.push_str(&format_task_pretty(*index, task, theme));
            output.push('\n');
        }
        output
    };

    if !skipped.is_empty() {
        output.push_str(&format_skipped_pretty(skipped));
    }

    output
}

/// Describe lines left out while loading.
pub fn format_skipped_pretty(skipped: &[LineError]) -> String {
    let mut output = format!(
        "\n{} {} invalid line(s):\n",
        "Skipped".yellow().bold(),
        skipped.len()
    );
    for entry in skipped {
        output.push_str(&format!(
            "  {} {}: {}\n",
            "line".dimmed(),
            entry.line,
            entry.reason
        ));
    }
    output
}
