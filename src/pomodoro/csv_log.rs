//! Append-only CSV log of completed intervals.
//!
//! The file holds one header row followed by one row per completed interval:
//!
//! ```text
//! date,type,start_time,end_time
//! 2024-03-01,focus,09:00:00,09:25:00
//! 2024-03-01,rest,09:25:02,09:30:02
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "pomodoro_log.csv";

/// Header row of the log file.
pub const LOG_HEADER: &str = "date,type,start_time,end_time";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
// Also accepts fractional seconds written by older logs.
const TIME_PARSE_FORMAT: &str = "%H:%M:%S%.f";

/// Kind of a completed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    /// A focus interval
    Focus,
    /// A rest interval
    Rest,
}

impl IntervalKind {
    /// Literal written to the `type` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Rest => "rest",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "focus" => Some(Self::Focus),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One completed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Date the record was written
    pub date: NaiveDate,
    /// Focus or rest
    #[serde(rename = "type")]
    pub kind: IntervalKind,
    /// Local start time
    pub start_time: NaiveTime,
    /// Local end time
    pub end_time: NaiveTime,
}

impl IntervalRecord {
    /// Build a record for an interval that just completed.
    ///
    /// `recorded_on` is the date of record creation, not of interval start.
    #[must_use]
    pub fn new(
        kind: IntervalKind,
        start: DateTime<Local>,
        end: DateTime<Local>,
        recorded_on: NaiveDate,
    ) -> Self {
        Self {
            date: recorded_on,
            kind,
            start_time: truncate_to_seconds(start.time()),
            end_time: truncate_to_seconds(end.time()),
        }
    }

    /// Length of the interval, wrapping past midnight.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let span = self.end_time.signed_duration_since(self.start_time);
        if span < Duration::zero() {
            span + Duration::days(1)
        } else {
            span
        }
    }

    /// Render as a CSV data row (without newline).
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT)
        )
    }

    /// Parse a CSV data row.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Parse` if the row does not have four valid columns.
    pub fn from_csv_row(row: &str) -> Result<Self, PomoError> {
        let fields: Vec<&str> = row.trim().split(',').map(str::trim).collect();
        let [date, kind, start, end] = fields.as_slice() else {
            return Err(PomoError::Parse(format!(
                "expected 4 columns, found {}",
                fields.len()
            )));
        };

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| PomoError::Parse(format!("invalid date '{date}': {e}")))?;
        let kind = IntervalKind::parse(kind)
            .ok_or_else(|| PomoError::Parse(format!("invalid interval type '{kind}'")))?;
        let start_time = NaiveTime::parse_from_str(start, TIME_PARSE_FORMAT)
            .map_err(|e| PomoError::Parse(format!("invalid start time '{start}': {e}")))?;
        let end_time = NaiveTime::parse_from_str(end, TIME_PARSE_FORMAT)
            .map_err(|e| PomoError::Parse(format!("invalid end time '{end}': {e}")))?;

        Ok(Self {
            date,
            kind,
            start_time: truncate_to_seconds(start_time),
            end_time: truncate_to_seconds(end_time),
        })
    }
}

fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    t.with_nanosecond(0).unwrap_or(t)
}

/// Destination for completed interval records.
pub trait IntervalLog {
    /// Append exactly one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be persisted.
    fn append(&self, record: &IntervalRecord) -> Result<(), PomoError>;
}

impl<T: IntervalLog + ?Sized> IntervalLog for &T {
    fn append(&self, record: &IntervalRecord) -> Result<(), PomoError> {
        (**self).append(record)
    }
}

/// Interval log stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    /// Create a log backed by `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order.
    ///
    /// A missing file reads as an empty log.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Io` if the file cannot be read, or
    /// `PomoError::Parse` naming the first malformed line.
    pub fn read_all(&self) -> Result<Vec<IntervalRecord>, PomoError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let mut records = Vec::new();

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || (idx == 0 && line == LOG_HEADER) {
                continue;
            }
            let record = IntervalRecord::from_csv_row(line).map_err(|e| {
                PomoError::Parse(format!("{}:{}: {e}", self.path.display(), idx + 1))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

impl IntervalLog for CsvLog {
    fn append(&self, record: &IntervalRecord) -> Result<(), PomoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let needs_header = std::fs::metadata(&self.path).map_or(true, |m| m.len() == 0);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut buf = String::new();
        if needs_header {
            buf.push_str(LOG_HEADER);
            buf.push('\n');
        }
        buf.push_str(&record.to_csv_row());
        buf.push('\n');

        file.write_all(buf.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
