//! Config command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::to_json;

/// Execute config subcommands against the config file at `path`.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written.
pub fn config(
    config: &Config,
    path: &Path,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
        },

        ConfigCommands::Path => Ok(path.display().to_string()),

        ConfigCommands::Init { force } => init(path, force),
    }
}

fn init(path: &Path, force: bool) -> Result<String, PomoError> {
    if path.exists() && !force {
        return Err(PomoError::Config(format!(
            "Config file {} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    Ok(format!("✓ Wrote default config to {}", path.display())
        .green()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".pomo").join("config.yaml");

        init(&path, false).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap().timer.focus_minutes, 25);

        assert!(init(&path, false).is_err());
        assert!(init(&path, true).is_ok());
    }

    #[test]
    fn test_show_yaml() {
        let out = config(
            &Config::default(),
            Path::new("config.yaml"),
            ConfigCommands::Show,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(out.contains("focus_minutes: 25"));
        assert!(out.contains("file: pomodoro_log.csv"));
    }
}
