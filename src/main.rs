use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use agenda::cli::args::{Cli, Commands};
use agenda::cli::commands;
use agenda::config::{ColorSetting, Config, Paths};
use agenda::storage::FileStore;

fn main() {
    if std::env::var("AGENDA_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("agenda=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::default();
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_file)?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let active = FileStore::new(cli.todo_file.unwrap_or_else(|| config.todo_file(&paths)));
    let archive = FileStore::new(
        cli.archive_file
            .unwrap_or_else(|| config.archive_file(&paths)),
    );

    tracing::debug!(
        active = %active.path().display(),
        archive = %archive.path().display(),
        "resolved stores"
    );

    let output = match cli.command {
        Commands::Add { text } => commands::add(&active, &text.join(" "), format)?,
        Commands::List => commands::list(&active, &config, format)?,
        Commands::Remove { index } => commands::remove(&active, &index, format)?,
        Commands::Done { index } => commands::done(&active, &archive, &index, format)?,
        Commands::Prioritize { index, priority } => {
            commands::prioritize(&active, &index, &priority, format)?
        },
        Commands::Chart { days } => {
            let today = chrono::Local::now().date_naive();
            commands::chart(&archive, &config, days, today, format)?
        },
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
