//! Pomodoro session state machine.
//!
//! A session moves `Idle -> Focusing -> Resting -> Idle` once per pomodoro and
//! counts every focus interval that runs to completion.

use std::io::{self, BufRead, Write};

use chrono::Duration;
use colored::Colorize;
use serde::Serialize;

use super::clock::Clock;
use super::csv_log::{IntervalKind, IntervalLog, IntervalRecord};
use super::notify::Notifier;
use super::progress::ProgressIndicator;
use super::prompt::ask_continue;
use super::timer::run_countdown;
use crate::error::PomoError;

/// Long rests last this many times the configured rest.
pub const LONG_REST_MULTIPLIER: u32 = 3;

/// Interval lengths, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    focus_minutes: u32,
    rest_minutes: u32,
    long_rest_interval: u32,
}

impl SessionConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if any value is zero.
    pub fn new(
        focus_minutes: u32,
        rest_minutes: u32,
        long_rest_interval: u32,
    ) -> Result<Self, PomoError> {
        for (name, value) in [
            ("focus_minutes", focus_minutes),
            ("rest_minutes", rest_minutes),
            ("long_rest_interval", long_rest_interval),
        ] {
            if value == 0 {
                return Err(PomoError::Config(format!(
                    "{name} must be greater than zero"
                )));
            }
        }

        Ok(Self {
            focus_minutes,
            rest_minutes,
            long_rest_interval,
        })
    }

    /// Length of a focus interval in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Length of a short rest in minutes.
    #[must_use]
    pub const fn rest_minutes(&self) -> u32 {
        self.rest_minutes
    }

    /// Every this many pomodoros, rest is long.
    #[must_use]
    pub const fn long_rest_interval(&self) -> u32 {
        self.long_rest_interval
    }

    /// Rest length that follows the `completed`th pomodoro.
    #[must_use]
    pub const fn rest_minutes_after(&self, completed: u32) -> u32 {
        if completed % self.long_rest_interval == 0 {
            self.rest_minutes.saturating_mul(LONG_REST_MULTIPLIER)
        } else {
            self.rest_minutes
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            rest_minutes: 5,
            long_rest_interval: 4,
        }
    }
}

/// What the session is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between pomodoros
    Idle,
    /// A focus interval is running
    Focusing,
    /// A rest interval is running
    Resting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Focusing => write!(f, "Focusing"),
            Self::Resting => write!(f, "Resting"),
        }
    }
}

/// How many cycles [`PomodoroSession::run`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Ask after every cycle whether to continue
    #[default]
    UntilStopped,
    /// Run a single focus and rest cycle without asking
    Once,
}

/// A running pomodoro session.
pub struct PomodoroSession<C, N, L, P> {
    config: SessionConfig,
    completed_count: u32,
    phase: Phase,
    clock: C,
    notifier: N,
    log: L,
    progress: P,
    warnings: Box<dyn Write>,
}

impl<C, N, L, P> PomodoroSession<C, N, L, P>
where
    C: Clock,
    N: Notifier,
    L: IntervalLog,
    P: ProgressIndicator,
{
    /// Create an idle session with nothing completed.
    pub fn new(config: SessionConfig, clock: C, notifier: N, log: L, progress: P) -> Self {
        Self {
            config,
            completed_count: 0,
            phase: Phase::Idle,
            clock,
            notifier,
            log,
            progress,
            warnings: Box::new(io::stderr()),
        }
    }

    /// Send log-write warnings to `out` instead of stderr.
    #[must_use]
    pub fn with_warnings(mut self, out: impl Write + 'static) -> Self {
        self.warnings = Box::new(out);
        self
    }

    /// Session configuration.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of focus intervals run to completion.
    pub const fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Total minutes spent in completed focus intervals.
    pub fn total_focus_minutes(&self) -> u64 {
        u64::from(self.completed_count) * u64::from(self.config.focus_minutes)
    }

    /// Rest length owed after the pomodoros completed so far.
    pub const fn next_rest_minutes(&self) -> u32 {
        self.config.rest_minutes_after(self.completed_count)
    }

    /// Run one focus interval to completion, then notify and log it.
    pub fn run_focus_interval(&mut self) -> IntervalRecord {
        self.phase = Phase::Focusing;
        log::debug!("focus interval #{} started", self.completed_count + 1);

        let label = format!("Starting pomodoro #{}...", self.completed_count + 1);
        let (start, end) = run_countdown(
            &self.clock,
            &label,
            Duration::minutes(i64::from(self.config.focus_minutes)),
            &mut self.progress,
        );

        self.completed_count += 1;
        self.notifier.notify(
            "Good job!",
            &format!(
                "Take a {} minute break! You have completed {} pomodoros so far.",
                self.config.rest_minutes,
                self.completed_count
            ),
        );

        let record = IntervalRecord::new(
            IntervalKind::Focus,
            start,
            end,
            self.clock.now().date_naive(),
        );
        self.persist(&record);
        record
    }

    /// Run the rest interval owed after the latest pomodoro, then notify and log it.
    pub fn run_rest_interval(&mut self) -> IntervalRecord {
        let minutes = self.next_rest_minutes();
        self.phase = Phase::Resting;
        log::debug!(
            "rest interval of {minutes} minutes started after pomodoro #{}",
            self.completed_count
        );

        let label = format!("Rest for {minutes} minutes...");
        let (start, end) = run_countdown(
            &self.clock,
            &label,
            Duration::minutes(i64::from(minutes)),
            &mut self.progress,
        );

        self.notifier
            .notify("Back to work!", "Start another pomodoro timer?");

        let record = IntervalRecord::new(
            IntervalKind::Rest,
            start,
            end,
            self.clock.now().date_naive(),
        );
        self.persist(&record);
        self.phase = Phase::Idle;
        record
    }

    /// Alternate focus and rest until the user declines to continue.
    ///
    /// A prompt that can no longer be read or written ends the session the
    /// same way as answering `n`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W, mode: RunMode) {
        loop {
            self.run_focus_interval();
            self.run_rest_interval();

            if mode == RunMode::Once {
                break;
            }
            match ask_continue(input, output) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("continue prompt failed, stopping: {e}");
                    break;
                }
            }
        }

        log::debug!(
            "session stopped after {} pomodoros",
            self.completed_count
        );
    }

    fn persist(&mut self, record: &IntervalRecord) {
        if let Err(e) = self.log.append(record) {
            log::debug!("append of {} interval failed: {e}", record.kind);
            let _ = writeln!(
                self.warnings,
                "{}: could not write {} interval to log: {e}",
                "warning".yellow().bold(),
                record.kind
            );
        }
    }
}
