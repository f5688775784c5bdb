use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::chart::MAX_CHART_DAYS;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "A plain-text task tracker for the terminal")]
#[command(long_about = "agenda - A plain-text task tracker

Tasks are stored one per line in ~/.agenda/todo.txt using the format:

  [DDMMYYYY] [HHMM] [(X)] description [@context] [+project]

Completed tasks are moved to ~/.agenda/done.txt.

QUICK START:
  agenda add 01032024 0930 (A) Pay rent @Home +Bills
  agenda list               Show tasks by priority, date and time
  agenda done 3             Complete task 3
  agenda chart 7            Completions over the last week

Task numbers always refer to the line number in todo.txt, not the
position in the sorted list.

For more information on a specific command, run:
  agenda <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured format (pretty unless changed).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file (default: ~/.agenda/config.yaml)
    #[arg(long, global = true, env = "AGENDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Active task store (default: ~/.agenda/todo.txt)
    #[arg(long, global = true, env = "AGENDA_TODO_FILE")]
    pub todo_file: Option<PathBuf>,

    /// Archive store for completed tasks (default: ~/.agenda/done.txt)
    #[arg(long, global = true, env = "AGENDA_ARCHIVE_FILE")]
    pub archive_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    ///
    /// The words are joined with single spaces and parsed as a task line.
    /// Leading date, time and priority, and trailing context and project,
    /// are recognized when they are well formed; anything else is part of
    /// the description. A description is required.
    ///
    /// # Examples
    ///
    ///   agenda add Buy milk
    ///   agenda add 01032024 0930 (A) Pay rent @Home +Bills
    ///   agenda a 1700 Call the plumber @Phone
    #[command(alias = "a")]
    Add {
        /// Task text: [DDMMYYYY] [HHMM] [(X)] description [@context] [+project]
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List active tasks
    ///
    /// Tasks with a priority come first (A before B ...), then by date,
    /// then by time. Tasks without a date or time come last. Each task
    /// shows its line number in todo.txt.
    #[command(alias = "l")]
    List,

    /// Remove a task without completing it
    #[command(alias = "r")]
    Remove {
        /// Task number as shown by `list`
        index: String,
    },

    /// Complete a task, moving it to the archive
    #[command(alias = "f", alias = "complete")]
    Done {
        /// Task number as shown by `list`
        index: String,
    },

    /// Set the priority of a task
    ///
    /// # Examples
    ///
    ///   agenda prioritize 2 a     Task 2 becomes (A)
    #[command(alias = "p")]
    Prioritize {
        /// Task number as shown by `list`
        index: String,
        /// Priority letter (A-Z, case-insensitive)
        priority: String,
    },

    /// Chart completed tasks per day
    ///
    /// Counts archived tasks by their date over the given number of days
    /// before today (at most 3660).
    #[command(alias = "g")]
    Chart {
        /// Number of days to look back
        #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_CHART_DAYS)))]
        days: u32,
    },

    /// Generate shell completions
    ///
    /// Example: agenda completions bash > ~/.bash_completion.d/agenda
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
