//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. Every field is optional;
//! missing values fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::pomodoro::{SessionConfig, DEFAULT_LOG_FILE};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Interval log settings.
    pub log: LogConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Short rest length in minutes.
    #[serde(default = "default_rest_minutes")]
    pub rest_minutes: u32,
    /// Number of pomodoros before a long rest.
    #[serde(default = "default_long_rest_interval")]
    pub long_rest_interval: u32,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

/// Interval log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// CSV file completed intervals are appended to.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_focus_minutes() -> u32 {
    25
}

const fn default_rest_minutes() -> u32 {
    5
}

const fn default_long_rest_interval() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            rest_minutes: default_rest_minutes(),
            long_rest_interval: default_long_rest_interval(),
            notifications: default_true(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl TimerConfig {
    /// Build a validated session configuration, letting `Some` overrides win.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if any resulting value is zero.
    pub fn session_config(
        &self,
        focus_minutes: Option<u32>,
        rest_minutes: Option<u32>,
        long_rest_interval: Option<u32>,
    ) -> Result<SessionConfig, PomoError> {
        SessionConfig::new(
            focus_minutes.unwrap_or(self.focus_minutes),
            rest_minutes.unwrap_or(self.rest_minutes),
            long_rest_interval.unwrap_or(self.long_rest_interval),
        )
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PomoError::Config(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.rest_minutes, 5);
        assert_eq!(config.timer.long_rest_interval, 4);
        assert!(config.timer.notifications);
        assert_eq!(config.log.file, PathBuf::from("pomodoro_log.csv"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.focus_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".pomo").join("config.yaml");

        let mut config = Config::default();
        config.timer.focus_minutes = 50;
        config.timer.notifications = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.focus_minutes, 50);
        assert!(!loaded.timer.notifications);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  focus_minutes: 45
log:
  file: /tmp/focus.csv
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.focus_minutes, 45);
        assert_eq!(config.log.file, PathBuf::from("/tmp/focus.csv"));
        // Defaults should be used for missing fields
        assert_eq!(config.timer.rest_minutes, 5);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  focus_minutes: many\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PomoError::Config(_)));
    }

    #[test]
    fn test_session_config_overrides() {
        let timer = TimerConfig::default();

        let session = timer.session_config(Some(50), None, None).unwrap();
        assert_eq!(session.focus_minutes(), 50);
        assert_eq!(session.rest_minutes(), 5);
        assert_eq!(session.long_rest_interval(), 4);

        assert!(timer.session_config(None, Some(0), None).is_err());
    }
}
