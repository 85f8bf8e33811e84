//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod timer;

pub use completions::completions;
pub use config::config;
pub use timer::{resolve_durations, run, run_sessions, tui};
