//! Path resolution for pomo configuration files.
//!
//! Configuration lives in `~/.pomo/`:
//! - `config.yaml` - Main configuration file
//!
//! The interval log is not stored here; it defaults to the working directory.

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomo configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
        }
    }

}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomo"))
        })
    }
}
