//! Configuration management for pomo.
//!
//! This module handles loading and saving configuration from `~/.pomo/`.

mod paths;
mod settings;

pub use paths::{Paths, LOG_FILE_NAME};
pub use settings::{Config, NotificationConfig, TimerConfig};
