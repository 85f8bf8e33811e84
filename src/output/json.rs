//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::PomoError;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PomoError::Parse(format!("Failed to serialize JSON: {e}")))
}

/// Format the effective configuration as JSON.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &std::path::Path) -> Result<String, PomoError> {
    let output = json!({
        "path": path.display().to_string(),
        "exists": path.exists(),
        "config": config,
    });
    to_json(&output)
}
