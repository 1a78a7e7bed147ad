//! Start command implementation.
//!
//! Runs the interactive focus/rest loop and reports what was accomplished.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{OutputFormat, StartArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::to_json;
use crate::pomodoro::{
    ConsoleProgress, CsvLog, DesktopNotifier, PomodoroSession, RunMode, SessionConfig,
    SystemClock,
};

/// What a finished session accomplished.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Completed focus intervals
    pub pomodoros: u32,
    /// Total focused minutes
    pub focus_minutes: u64,
    /// Log the intervals were appended to
    pub log_file: PathBuf,
}

impl SessionSummary {
    /// Format the closing line shown after the session ends.
    #[must_use]
    pub fn format(&self) -> String {
        format!("Way to stay focused for {} minutes!", self.focus_minutes)
    }
}

/// Run pomodoros until the user stops.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal fails.
pub fn start(config: &Config, args: StartArgs, format: OutputFormat) -> Result<String, PomoError> {
    let session_config = config
        .timer
        .session_config(args.focus, args.rest, args.interval)?;
    let log_file = args.log_file.unwrap_or_else(|| config.log.file.clone());
    let notifier = if args.no_notify || !config.timer.notifications {
        DesktopNotifier::disabled()
    } else {
        DesktopNotifier::default()
    };
    let mode = if args.once {
        RunMode::Once
    } else {
        RunMode::UntilStopped
    };

    let mut console = console(format);
    writeln!(console, "{}", banner(&session_config, &log_file))?;

    let mut session = PomodoroSession::new(
        session_config,
        SystemClock,
        notifier,
        CsvLog::new(&log_file),
        ConsoleProgress::new(self::console(format)),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    session.run(&mut input, &mut console, mode);

    let summary = SessionSummary {
        pomodoros: session.completed_count(),
        focus_minutes: session.total_focus_minutes(),
        log_file,
    };

    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => Ok(format!("\n{}", summary.format().green().bold())),
    }
}

/// Interactive output goes to stderr in JSON mode so stdout stays parseable.
fn console(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Pretty => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}

fn banner(config: &SessionConfig, log_file: &std::path::Path) -> String {
    let mut lines = Vec::new();
    lines.push("🍅 Pomodoro session".bold().to_string());
    lines.push(format!(
        "   Focus {} min, rest {} min, long rest {} min every {} pomodoros",
        config.focus_minutes(),
        config.rest_minutes(),
        config.rest_minutes_after(config.long_rest_interval()),
        config.long_rest_interval()
    ));
    lines.push(
        format!("   Logging to {}", log_file.display())
            .dimmed()
            .to_string(),
    );
    lines.push("   Press Ctrl-C to abandon the current interval".dimmed().to_string());
    lines.join("\n")
}
