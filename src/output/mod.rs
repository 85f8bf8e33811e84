//! Output formatting for pomo.
//!
//! This module provides formatters for config and a line-mode renderer for
//! the countdown.

mod json;
mod line;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;

pub use json::*;
pub use line::{format_status_line, LineRenderer};
pub use pretty::*;

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    path: &std::path::Path,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}
