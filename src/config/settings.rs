//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. Nothing here is written
//! back by the timer itself; durations changed at runtime last only for the
//! current process.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::PomoError;
use crate::session::{parse_minutes, Durations, SessionKind};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Interval durations.
    pub timer: TimerConfig,
    /// Alert settings.
    pub notifications: NotificationConfig,
}

/// Starting interval durations.
///
/// Minute values that are not positive whole numbers load as the kind's
/// default instead of failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session duration in minutes.
    #[serde(default = "default_work", deserialize_with = "work_minutes")]
    pub work_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break", deserialize_with = "short_break_minutes")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break", deserialize_with = "long_break_minutes")]
    pub long_break_minutes: u32,
}

/// Alert settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub desktop: bool,
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub sound: bool,
}

// Default value functions for serde
const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

fn lenient_minutes<'de, D>(deserializer: D, kind: SessionKind) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = match Value::deserialize(deserializer)? {
        Value::Number(n) => parse_minutes(&n.to_string(), kind),
        Value::String(text) => parse_minutes(&text, kind),
        _ => kind.default_minutes(),
    };
    Ok(minutes)
}

fn work_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(deserializer, SessionKind::Work)
}

fn short_break_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(deserializer, SessionKind::ShortBreak)
}

fn long_break_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(deserializer, SessionKind::LongBreak)
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            desktop: default_true(),
            sound: default_true(),
        }
    }
}

impl TimerConfig {
    /// Durations from config, with zeros replaced by defaults.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        Durations::sanitized(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file parses as YAML null; treat it as all defaults
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
