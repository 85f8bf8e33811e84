//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running the timer or its commands.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or polled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Serialization or argument parsing failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
