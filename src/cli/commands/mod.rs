//! Command implementations for pomo.
//!
//! Each command returns the text to print on stdout.

mod completions;
mod config;
mod history;
mod report;
mod start;

pub use completions::completions;
pub use config::config;
pub use history::history;
pub use report::report;
pub use start::{start, SessionSummary};
