use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, TimerArgs};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let paths = Paths::new()?;

    // The timer still works without a log file
    let _log_guard = logging::init(&paths, cli.verbose).ok();

    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Tui(TimerArgs::default()));

    let output = match command {
        Commands::Tui(args) => commands::tui(&config, &args)?,
        Commands::Run(args) => commands::run(&config, &args, format)?,
        Commands::Config(args) => commands::config(&paths, &config, args.command, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
