use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::pomodoro::IntervalKind;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer with desktop notifications and a CSV activity log")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternates focus and rest intervals, pops a desktop notification when each
one ends, and appends every completed interval to a CSV log.

QUICK START:
  pomo start                 25 minute focus, 5 minute rest, long rest every 4th
  pomo start -f 50 -r 10     Custom interval lengths
  pomo history               Recent intervals from the log
  pomo report --period week  Focus totals for the last 7 days

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the config file setting, then 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.pomo/config.yaml
    #[arg(long, global = true, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run pomodoros until you stop
    ///
    /// Runs a focus interval, then a rest interval, then asks whether to
    /// start another. Every fourth rest (by default) is three times longer.
    /// Completed intervals are appended to the CSV log.
    ///
    /// # Examples
    ///
    ///   pomo start                      Defaults from config (25/5/4)
    ///   pomo start -f 50 -r 10 -i 3     Custom lengths and cadence
    ///   pomo start --once               One focus and rest, no prompt
    ///   pomo start --log-file work.csv  Log somewhere else
    Start(StartArgs),

    /// Show recent intervals from the log
    ///
    /// # Examples
    ///
    ///   pomo history                    Last 10 intervals
    ///   pomo history -n 50 --kind focus Last 50 focus intervals
    History(HistoryArgs),

    /// Summarize focus time from the log
    ///
    /// # Examples
    ///
    ///   pomo report                     Last 7 days
    ///   pomo report --period today
    ///   pomo report --period all -o json
    Report(ReportArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Print shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the start command.
#[derive(Args, Debug, Default)]
pub struct StartArgs {
    /// Focus interval length in minutes
    #[arg(short, long)]
    pub focus: Option<u32>,

    /// Short rest length in minutes (long rests are three times this)
    #[arg(short, long)]
    pub rest: Option<u32>,

    /// Number of pomodoros before a long rest
    #[arg(short, long)]
    pub interval: Option<u32>,

    /// CSV file to append completed intervals to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not show desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Run a single focus and rest cycle without asking to continue
    #[arg(long)]
    pub once: bool,
}

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of intervals to show
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: usize,

    /// Only show one kind of interval
    #[arg(long, short = 'k', value_enum)]
    pub kind: Option<IntervalKind>,

    /// CSV log to read
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Period to report on (today, week, month, all)
    #[arg(long, short = 'p', default_value = "week")]
    pub period: String,

    /// CSV log to read
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
