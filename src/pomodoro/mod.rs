//! Pomodoro sessions and their collaborators.
//!
//! A session alternates focus and rest intervals:
//! - Focus intervals of a fixed length, counted when they complete
//! - Rest intervals, three times longer every Nth pomodoro
//! - Desktop notifications at the end of each interval
//! - An append-only CSV log of completed intervals

pub mod clock;
pub mod csv_log;
pub mod notify;
pub mod progress;
pub mod prompt;
pub mod report;
pub mod session;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use csv_log::{CsvLog, IntervalKind, IntervalLog, IntervalRecord, DEFAULT_LOG_FILE};
pub use notify::{DesktopNotifier, Notifier};
pub use progress::{ConsoleProgress, ProgressIndicator};
pub use prompt::{ask_continue, CONTINUE_PROMPT};
pub use report::{FocusReport, ReportPeriod};
pub use session::{Phase, PomodoroSession, RunMode, SessionConfig};
pub use timer::{format_duration, format_duration_mmss, render_progress_bar, run_countdown, Countdown};
