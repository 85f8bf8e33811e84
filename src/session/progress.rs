//! Progress computation and countdown formatting.

/// Fraction of an interval that has elapsed, clamped to 0.0 - 1.0.
///
/// A zero-length interval counts as finished.
#[must_use]
pub fn progress_fraction(total_seconds: u32, remaining_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let elapsed = f64::from(total_seconds) - f64::from(remaining_seconds);
    (elapsed / f64::from(total_seconds)).clamp(0.0, 1.0)
}

/// Split seconds into whole minutes and leftover seconds.
#[must_use]
pub const fn split_minutes(seconds: u32) -> (u32, u32) {
    (seconds / 60, seconds % 60)
}

/// Format seconds as MM:SS.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let (minutes, seconds) = split_minutes(seconds);
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Points along the swept part of a ring, starting at twelve o'clock and
/// running clockwise.
///
/// `steps` is the point count of a full ring; the returned arc holds the
/// share of them covered by `progress`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ring_arc(progress: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let swept = (progress.clamp(0.0, 1.0) * steps as f64).round() as usize;
    (0..swept)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64 / steps as f64);
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}
