//! Tracing setup.
//!
//! Logs go to `~/.pomo/pomo.log` so they never interleave with the TUI.
//! `POMO_LOG` overrides the filter using `EnvFilter` syntax.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{Paths, LOG_FILE_NAME};
use crate::error::PomoError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "POMO_LOG";

/// Default filter directive.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "pomo=debug"
    } else {
        "pomo=info"
    }
}

/// Install the global subscriber writing to the log file.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(paths: &Paths, verbose: bool) -> Result<WorkerGuard, PomoError> {
    paths.ensure_dirs()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&paths.root)
        .map_err(|e| PomoError::Config(format!("Failed to open log file: {e}")))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(guard)
}
