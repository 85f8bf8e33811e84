//! Timer command implementations.
//!
//! Both front-ends share the same controller; they differ only in the
//! renderer they plug into it.

use std::io;

use chrono::Local;
use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::{OutputFormat, RunArgs, TimerArgs};
use crate::config::Config;
use crate::core::{Notifier, Renderer};
use crate::error::PomoError;
use crate::notify::DesktopNotifier;
use crate::output::{to_json, LineRenderer};
use crate::session::{
    parse_minutes, progress, Clock, Durations, SessionController, SessionKind, SystemClock,
};

/// Layer command-line duration flags over the configured durations.
#[must_use]
pub fn resolve_durations(config: &Config, args: &TimerArgs) -> Durations {
    let base = config.timer.durations();
    let pick = |flag: &Option<String>, kind: SessionKind| {
        flag.as_deref()
            .map_or(base.minutes(kind), |value| parse_minutes(value, kind))
    };

    Durations {
        work: pick(&args.work, SessionKind::Work),
        short_break: pick(&args.short, SessionKind::ShortBreak),
        long_break: pick(&args.long, SessionKind::LongBreak),
    }
}

/// Open the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn tui(config: &Config, args: &TimerArgs) -> Result<String, PomoError> {
    let durations = resolve_durations(config, args);
    let notifier = DesktopNotifier::from_config(&config.notifications);
    crate::tui::run(durations, notifier)?;
    Ok(String::new())
}

/// Run sessions in line mode on stdout.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON summary serialization fails.
pub fn run(config: &Config, args: &RunArgs, format: OutputFormat) -> Result<String, PomoError> {
    let durations = resolve_durations(config, &args.timer);
    let notifier = DesktopNotifier::from_config(&config.notifications);
    let mut controller =
        SessionController::new(durations, LineRenderer::new(io::stdout()), notifier);

    info!(sessions = args.sessions, "line-mode run started");
    let completed = run_sessions(&mut controller, args.sessions, &mut SystemClock);
    controller.renderer_mut().finish();

    format_summary(&controller, completed, format)
}

/// Drive the controller until `sessions` intervals have completed.
///
/// Each following interval starts automatically. Returns the number of
/// completed intervals.
pub fn run_sessions<R: Renderer, N: Notifier, C: Clock>(
    controller: &mut SessionController<R, N>,
    sessions: u32,
    clock: &mut C,
) -> u32 {
    let mut completed = 0;
    if sessions == 0 {
        return completed;
    }

    controller.start_at(clock.now());
    while completed < sessions {
        if let Some(wait) = controller.next_tick_in(clock.now()) {
            clock.sleep(wait);
        }
        controller.advance(clock.now());

        if !controller.is_running() {
            completed += 1;
            if completed < sessions {
                controller.start_at(clock.now());
            }
        }
    }

    completed
}

fn format_summary<R, N>(
    controller: &SessionController<R, N>,
    completed: u32,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "completed": completed,
            "next": controller.kind(),
            "remaining_seconds": controller.remaining_seconds(),
            "cycle_index": controller.cycle_index(),
            "durations": controller.durations(),
        })),
        OutputFormat::Pretty => {
            let plural = if completed == 1 { "" } else { "s" };
            Ok(format!(
                "{} Completed {completed} session{plural} at {}\n   Next: {} ({})",
                "✅".green(),
                Local::now().format("%H:%M"),
                controller.kind().label().bold(),
                progress::format_mmss(controller.remaining_seconds())
            ))
        }
    }
}
