//! History command implementation.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{HistoryArgs, OutputFormat};
use crate::config::Config;
use crate::error::PomoError;
use crate::pomodoro::{CsvLog, IntervalKind, IntervalRecord};

/// Show the most recent intervals from the log, oldest first.
///
/// # Errors
///
/// Returns an error if the log cannot be read or parsed.
pub fn history(config: &Config, args: HistoryArgs, format: OutputFormat) -> Result<String, PomoError> {
    let log = CsvLog::new(args.log_file.unwrap_or_else(|| config.log.file.clone()));
    let records = recent(log.read_all()?, args.kind, args.limit);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "log_file": log.path(),
            "count": records.len(),
            "items": records,
        }))?),
        OutputFormat::Pretty => Ok(format_history(&records, log.path())),
    }
}

fn recent(
    records: Vec<IntervalRecord>,
    kind: Option<IntervalKind>,
    limit: usize,
) -> Vec<IntervalRecord> {
    let mut matching: Vec<IntervalRecord> = records
        .into_iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .collect();
    let skip = matching.len().saturating_sub(limit);
    matching.drain(..skip);
    matching
}

fn format_history(records: &[IntervalRecord], path: &Path) -> String {
    if records.is_empty() {
        return format!(
            "No intervals logged in {}.\n\nStart one with: pomo start",
            path.display()
        );
    }

    let mut output = Vec::new();
    output.push("📋 Interval History".bold().to_string());
    output.push("═".repeat(48));
    output.push(format!(
        "{:<12} {:<6} {:<9} {:<9} {}",
        "Date", "Type", "Start", "End", "Length"
    ));
    output.push("─".repeat(48));

    for record in records {
        let kind = match record.kind {
            IntervalKind::Focus => "focus".red().to_string(),
            IntervalKind::Rest => "rest ".green().to_string(),
        };
        output.push(format!(
            "{:<12} {:<6} {:<9} {:<9} {:>3}m",
            record.date.to_string(),
            kind,
            record.start_time.format("%H:%M:%S").to_string(),
            record.end_time.format("%H:%M:%S").to_string(),
            record.duration().num_minutes()
        ));
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rows() -> Vec<IntervalRecord> {
        [
            "2024-03-01,focus,09:00:00,09:25:00",
            "2024-03-01,rest,09:25:00,09:30:00",
            "2024-03-01,focus,09:30:00,09:55:00",
            "2024-03-01,rest,09:55:00,10:00:00",
        ]
        .iter()
        .map(|line| IntervalRecord::from_csv_row(line).unwrap())
        .collect()
    }

    #[test]
    fn test_recent_keeps_latest_in_order() {
        let latest = recent(rows(), None, 3);
        assert_eq!(latest.len(), 3);
        assert_eq!(latest[0].kind, IntervalKind::Rest);
        assert_eq!(latest[2].start_time.to_string(), "09:55:00");
    }

    #[test]
    fn test_recent_filters_kind() {
        let focus = recent(rows(), Some(IntervalKind::Focus), 10);
        assert_eq!(focus.len(), 2);
        assert!(focus.iter().all(|r| r.kind == IntervalKind::Focus));
    }

    #[test]
    fn test_history_json_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.csv");
        std::fs::write(
            &path,
            "date,type,start_time,end_time\n2024-03-01,focus,09:00:00,09:25:00\n",
        )
        .unwrap();

        let args = HistoryArgs {
            limit: 10,
            kind: None,
            log_file: Some(path),
        };
        let out = history(&Config::default(), args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["type"], "focus");
        assert_eq!(value["items"][0]["start_time"], "09:00:00");
    }

    #[test]
    fn test_history_empty_log_message() {
        let temp_dir = TempDir::new().unwrap();
        let args = HistoryArgs {
            limit: 10,
            kind: None,
            log_file: Some(temp_dir.path().join("none.csv")),
        };
        let out = history(&Config::default(), args, OutputFormat::Pretty).unwrap();
        assert!(out.contains("No intervals logged"));
    }
}
