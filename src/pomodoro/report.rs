//! Focus reports built from the interval log.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::csv_log::{IntervalKind, IntervalRecord};
use super::timer::format_duration;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// First date included in this period, or `None` for all time.
    #[must_use]
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(today),
            Self::Week => Some(today - Duration::days(6)),
            Self::Month => Some(today - Duration::days(29)),
            Self::AllTime => None,
        }
    }

    /// Check whether `date` falls in this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date <= today && self.start_date(today).map_or(true, |start| date >= start)
    }

    /// Parse period from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Some(Self::Today),
            "week" | "w" | "7d" => Some(Self::Week),
            "month" | "m" | "30d" => Some(Self::Month),
            "all" | "alltime" | "all-time" => Some(Self::AllTime),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Focus report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusReport {
    /// Report period name
    pub period: String,
    /// Completed focus intervals
    pub pomodoros: u32,
    /// Total focus time in minutes
    pub focus_minutes: i64,
    /// Completed rest intervals
    pub rests: u32,
    /// Total rest time in minutes
    pub rest_minutes: i64,
    /// Daily breakdown, newest first
    pub daily: Vec<DailyFocusTime>,
    /// Current streak (consecutive days with a pomodoro)
    pub streak_days: u32,
}

/// Focus time per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFocusTime {
    /// Date
    pub date: NaiveDate,
    /// Total focus minutes
    pub minutes: i64,
    /// Pomodoro count
    pub pomodoros: u32,
}

impl FocusReport {
    /// Summarize `records` falling in `period`, relative to `today`.
    #[must_use]
    pub fn generate(records: &[IntervalRecord], period: ReportPeriod, today: NaiveDate) -> Self {
        let mut pomodoros = 0;
        let mut focus_minutes = 0;
        let mut rests = 0;
        let mut rest_minutes = 0;
        let mut daily_map: BTreeMap<NaiveDate, (i64, u32)> = BTreeMap::new();

        for record in records.iter().filter(|r| period.contains(r.date, today)) {
            let minutes = record.duration().num_minutes();
            match record.kind {
                IntervalKind::Focus => {
                    pomodoros += 1;
                    focus_minutes += minutes;
                    let entry = daily_map.entry(record.date).or_insert((0, 0));
                    entry.0 += minutes;
                    entry.1 += 1;
                }
                IntervalKind::Rest => {
                    rests += 1;
                    rest_minutes += minutes;
                }
            }
        }

        // Streaks look at the whole log, not just the reported period.
        let streak_days = calculate_streak(records, today);

        let daily = daily_map
            .into_iter()
            .rev()
            .map(|(date, (minutes, pomodoros))| DailyFocusTime {
                date,
                minutes,
                pomodoros,
            })
            .collect();

        Self {
            period: period.display_name().to_string(),
            pomodoros,
            focus_minutes,
            rests,
            rest_minutes,
            daily,
            streak_days,
        }
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("🍅 Focus Report: {}", self.period));
        lines.push("═".repeat(50));
        lines.push(String::new());

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!(
            "  Total focus time:    {}",
            format_duration(Duration::minutes(self.focus_minutes))
        ));
        lines.push(format!("  Pomodoros:           {}", self.pomodoros));
        lines.push(format!(
            "  Total rest time:     {}",
            format_duration(Duration::minutes(self.rest_minutes))
        ));
        lines.push(format!("  Rests:               {}", self.rests));
        lines.push(format!("  Current streak:      {} days", self.streak_days));

        if !self.daily.is_empty() {
            lines.push(String::new());
            lines.push("Recent Days".to_string());
            lines.push("─".repeat(40));

            for day in self.daily.iter().take(7) {
                lines.push(format!(
                    "  {} {:>4}m ({} pomodoros)",
                    day.date, day.minutes, day.pomodoros
                ));
            }
        }

        lines.join("\n")
    }
}

/// Count consecutive days with a pomodoro, ending today (or yesterday if
/// nothing has been logged yet today).
fn calculate_streak(records: &[IntervalRecord], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = records
        .iter()
        .filter(|r| r.kind == IntervalKind::Focus)
        .map(|r| r.date)
        .collect();
    dates.sort_unstable();
    dates.dedup();

    let mut check_date = today;
    if dates.binary_search(&check_date).is_err() {
        check_date = today - Duration::days(1);
    }

    let mut streak = 0;
    while dates.binary_search(&check_date).is_ok() {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn row(line: &str) -> IntervalRecord {
        IntervalRecord::from_csv_row(line).unwrap()
    }

    fn sample_log() -> Vec<IntervalRecord> {
        vec![
            row("2024-03-01,focus,09:00:00,09:25:00"),
            row("2024-03-01,rest,09:25:00,09:30:00"),
            row("2024-03-09,focus,09:00:00,09:25:00"),
            row("2024-03-09,rest,09:25:00,09:30:00"),
            row("2024-03-10,focus,09:00:00,09:25:00"),
            row("2024-03-10,rest,09:25:00,09:30:00"),
            row("2024-03-10,focus,09:30:00,09:55:00"),
            row("2024-03-10,rest,09:55:00,10:10:00"),
        ]
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!(ReportPeriod::parse("today"), Some(ReportPeriod::Today));
        assert_eq!(ReportPeriod::parse("week"), Some(ReportPeriod::Week));
        assert_eq!(ReportPeriod::parse("Month"), Some(ReportPeriod::Month));
        assert_eq!(ReportPeriod::parse("all"), Some(ReportPeriod::AllTime));
        assert_eq!(ReportPeriod::parse("fortnight"), None);
    }

    #[test]
    fn test_report_period_contains() {
        assert!(ReportPeriod::Today.contains(day(10), day(10)));
        assert!(!ReportPeriod::Today.contains(day(9), day(10)));
        assert!(ReportPeriod::Week.contains(day(4), day(10)));
        assert!(!ReportPeriod::Week.contains(day(3), day(10)));
        assert!(ReportPeriod::AllTime.contains(day(1), day(10)));
        assert!(!ReportPeriod::AllTime.contains(day(11), day(10)));
    }

    #[test]
    fn test_generate_today() {
        let report = FocusReport::generate(&sample_log(), ReportPeriod::Today, day(10));

        assert_eq!(report.pomodoros, 2);
        assert_eq!(report.focus_minutes, 50);
        assert_eq!(report.rests, 2);
        assert_eq!(report.rest_minutes, 20);
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.streak_days, 2);
    }

    #[test]
    fn test_generate_all_time_daily_newest_first() {
        let report = FocusReport::generate(&sample_log(), ReportPeriod::AllTime, day(10));

        assert_eq!(report.pomodoros, 4);
        assert_eq!(report.focus_minutes, 100);
        let dates: Vec<NaiveDate> = report.daily.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(10), day(9), day(1)]);
    }

    #[test]
    fn test_streak_counts_from_yesterday() {
        assert_eq!(calculate_streak(&sample_log(), day(11)), 2);
        assert_eq!(calculate_streak(&sample_log(), day(12)), 0);
    }

    #[test]
    fn test_format_contains_summary() {
        let report = FocusReport::generate(&sample_log(), ReportPeriod::Week, day(10));
        let text = report.format();

        assert!(text.contains("This Week"));
        assert!(text.contains("Pomodoros:           3"));
        assert!(text.contains("1 hour, 15 minutes"));
        assert!(text.contains("2024-03-10"));
    }

    #[test]
    fn test_empty_log() {
        let report = FocusReport::generate(&[], ReportPeriod::Week, day(10));
        assert_eq!(report.pomodoros, 0);
        assert_eq!(report.streak_days, 0);
        assert!(!report.format().contains("Recent Days"));
    }
}
