use colored::Colorize;

use crate::config::Config;
use crate::session::{Durations, SessionKind};

/// Format the effective configuration for humans.
pub fn format_config_pretty(config: &Config, path: &std::path::Path) -> String {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let mut output = format!("{}\n", "Configuration".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("{}  {}\n", "File:".dimmed(), source));
    output.push('\n');
    output.push_str(&format_durations_pretty(&config.timer.durations()));
    output.push('\n');
    output.push_str(&format!(
        "Desktop notifications  {}\n",
        on_off(config.notifications.desktop)
    ));
    output.push_str(&format!(
        "Sound                  {}",
        on_off(config.notifications.sound)
    ));

    output
}

/// Format durations as an aligned table.
pub fn format_durations_pretty(durations: &Durations) -> String {
    SessionKind::ALL
        .iter()
        .map(|kind| {
            let minutes = format!("{} min", durations.minutes(*kind));
            let styled = match kind {
                SessionKind::Work => minutes.red(),
                SessionKind::ShortBreak => minutes.green(),
                SessionKind::LongBreak => minutes.blue(),
            };
            format!("{:<23}{}\n", kind.label(), styled)
        })
        .collect()
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "on".green()
    } else {
        "off".dimmed()
    }
}
