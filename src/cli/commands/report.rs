//! Report command implementation.

use chrono::Local;

use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::to_json;
use crate::pomodoro::{CsvLog, FocusReport, ReportPeriod};

/// Summarize focus time for a period.
///
/// # Errors
///
/// Returns an error if the period is unknown or the log cannot be read.
pub fn report(config: &Config, args: ReportArgs, format: OutputFormat) -> Result<String, PomoError> {
    let period = ReportPeriod::parse(&args.period).ok_or_else(|| {
        PomoError::Parse(format!(
            "Unknown period '{}'. Use today, week, month, or all",
            args.period
        ))
    })?;

    let log = CsvLog::new(args.log_file.unwrap_or_else(|| config.log.file.clone()));
    let records = log.read_all()?;
    let report = FocusReport::generate(&records, period, Local::now().date_naive());

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(report.format()),
    }
}
