//! Completion chart.
//!
//! Aggregates archived tasks by date over a trailing window of days and
//! renders the result in the terminal.

mod collector;
mod visualization;

pub use collector::{completions_by_day, trailing_window, DayCount, MAX_CHART_DAYS};
pub use visualization::{render_bar_chart, render_completion_chart, render_sparkline};
