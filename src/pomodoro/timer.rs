//! Countdown timing for pomodoro intervals.
//!
//! Timing is driven by a wall-clock deadline; the per-second ticks only feed
//! the progress display.

use chrono::{DateTime, Duration, Local};

use super::clock::Clock;
use super::progress::ProgressIndicator;

/// Tick accounting for a countdown of whole seconds.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Total duration in seconds
    total_seconds: u64,
    /// Seconds ticked so far
    elapsed_seconds: u64,
}

impl Countdown {
    /// Create a countdown over `total_seconds`.
    #[must_use]
    pub const fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            elapsed_seconds: 0,
        }
    }

    /// Advance by one second.
    ///
    /// Returns true if the countdown just completed.
    pub fn tick(&mut self) -> bool {
        if self.elapsed_seconds >= self.total_seconds {
            return false;
        }
        self.elapsed_seconds += 1;
        self.elapsed_seconds == self.total_seconds
    }

    /// Total length in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Seconds ticked so far.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Seconds left until completion.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.total_seconds.saturating_sub(self.elapsed_seconds)
    }

    /// Check if every second has been ticked.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.elapsed_seconds >= self.total_seconds
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        self.elapsed_seconds as f64 / self.total_seconds as f64
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(Duration::seconds(self.remaining_seconds() as i64))
    }
}

/// Block until `duration` has passed on `clock`, ticking `progress` once per
/// elapsed second.
///
/// Returns the start timestamp and the scheduled end (`start + duration`).
pub fn run_countdown<C, P>(
    clock: &C,
    label: &str,
    duration: Duration,
    progress: &mut P,
) -> (DateTime<Local>, DateTime<Local>)
where
    C: Clock + ?Sized,
    P: ProgressIndicator + ?Sized,
{
    let start = clock.now();
    let end = start + duration;

    #[allow(clippy::cast_sign_loss)]
    let total_seconds = duration.num_seconds().max(0) as u64;
    let mut countdown = Countdown::new(total_seconds);
    progress.begin(label, &countdown);

    loop {
        let now = clock.now();
        if now >= end {
            break;
        }

        let remaining = (end - now).to_std().unwrap_or_default();
        clock.sleep(remaining.min(std::time::Duration::from_secs(1)));

        #[allow(clippy::cast_sign_loss)]
        let elapsed = (clock.now() - start).num_seconds().max(0) as u64;
        while countdown.elapsed_seconds() < elapsed.min(total_seconds) {
            countdown.tick();
            progress.tick(&countdown);
        }
    }

    // A late wake-up can skip ticks; the display always ends full.
    while !countdown.is_completed() {
        countdown.tick();
        progress.tick(&countdown);
    }
    progress.finish(&countdown);

    (start, end)
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
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
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
