//! Config command implementation.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => format_config(config, &paths.config_file, format),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init_config(paths, force, format),
    }
}

/// Write the default configuration file.
fn init_config(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, PomoError> {
    if paths.config_file.exists() && !force {
        return Err(PomoError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    info!(path = %paths.config_file.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "path": paths.config_file.display().to_string(),
            "written": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} Wrote {}",
            "✅".green(),
            paths.config_file.display()
        )),
    }
}
