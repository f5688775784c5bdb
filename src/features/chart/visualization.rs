//! Terminal rendering for the completion chart.

use super::DayCount;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - Vec of (label, value) pairs
/// * `bar_width` - Width of the longest bar
///
/// # Returns
///
/// A multi-line string with the chart.
pub fn render_bar_chart(data: &[(String, usize)], bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let label_width = data.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    data.iter()
        .map(|(label, value)| {
            let bar_length = value * bar_width / max_value;
            format!(
                "{label:label_width$} |{}{} {value}",
                FULL_BLOCK.to_string().repeat(bar_length),
                " ".repeat(bar_width - bar_length),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a sparkline (compact inline chart).
pub fn render_sparkline(values: &[usize]) -> String {
    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                // Non-zero values always get at least the lowest bar.
                BAR_CHARS[(v * 7 / max_value).clamp(1, 7)]
            }
        })
        .collect()
}

/// Render the per-day counts as a titled bar chart with a sparkline.
pub fn render_completion_chart(counts: &[DayCount], bar_width: usize) -> String {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let mut lines = vec![format!(
        "Completed tasks, last {} day(s): {total}",
        counts.len()
    )];

    if counts.is_empty() {
        return lines.join("\n");
    }

    lines.push("─".repeat(60));
    let data: Vec<(String, usize)> = counts
        .iter()
        .map(|c| (c.date.format("%d/%m/%y").to_string(), c.count))
        .collect();
    lines.push(render_bar_chart(&data, bar_width));
    lines.push(String::new());

    let values: Vec<usize> = counts.iter().map(|c| c.count).collect();
    lines.push(format!("Trend: {}", render_sparkline(&values)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_sparkline() {
        let values = [0, 2, 5, 3, 8, 4, 1];
        let sparkline = render_sparkline(&values);
        assert_eq!(sparkline.chars().count(), 7);
        assert_eq!(sparkline.chars().next(), Some(' '));
        assert_eq!(sparkline.chars().nth(4), Some('▇'));
        assert_eq!(sparkline.chars().nth(6), Some('▁'));
    }

    #[test]
    fn test_render_sparkline_empty() {
        assert!(render_sparkline(&[]).is_empty());
    }

    #[test]
    fn test_render_bar_chart() {
        let data = vec![
            ("A".to_string(), 5),
            ("B".to_string(), 10),
            ("C".to_string(), 0),
        ];
        let chart = render_bar_chart(&data, 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("A |{}{} 5", "█".repeat(5), " ".repeat(5)));
        assert_eq!(lines[1], format!("B |{} 10", "█".repeat(10)));
        assert_eq!(lines[2], format!("C |{} 0", " ".repeat(10)));
    }

    #[test]
    fn test_render_completion_chart() {
        let counts = vec![
            DayCount {
                date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                count: 2,
            },
            DayCount {
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                count: 1,
            },
        ];
        let chart = render_completion_chart(&counts, 20);

        assert!(chart.contains("last 2 day(s): 3"));
        assert!(chart.contains("28/02/25 |"));
        assert!(chart.contains("01/03/25 |"));
        assert!(chart.contains("Trend:"));
    }

    #[test]
    fn test_render_completion_chart_empty_window() {
        let chart = render_completion_chart(&[], 20);
        assert_eq!(chart, "Completed tasks, last 0 day(s): 0");
    }
}
