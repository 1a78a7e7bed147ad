//! pomo - A Pomodoro timer for the terminal
//!
//! This crate runs alternating focus and rest intervals, sends desktop
//! notifications when each one ends, and keeps an append-only CSV log of
//! completed intervals.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pomodoro;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use pomodoro::{PomodoroSession, SessionConfig};
