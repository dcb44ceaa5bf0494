//! File locations used by the REPL.
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file by the binary) and fall back to files in the working
//! directory.

use std::path::PathBuf;

/// Environment variable naming the calculation log file.
pub const LOG_FILE_VAR: &str = "CALCULATOR_LOG_FILE";

/// Environment variable naming the CSV history file.
pub const HISTORY_FILE_VAR: &str = "CALCULATOR_HISTORY_FILE";

pub const DEFAULT_LOG_FILE: &str = "calculator.log";
pub const DEFAULT_HISTORY_FILE: &str = "history.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where [`LoggingObserver`](crate::observer::LoggingObserver) appends
    pub log_file: PathBuf,
    /// Where `save`, `load` and auto-save read and write
    pub history_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            log_file: read(LOG_FILE_VAR, DEFAULT_LOG_FILE),
            history_file: read(HISTORY_FILE_VAR, DEFAULT_HISTORY_FILE),
        }
    }

    /// Replace settings with explicit values where given.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, history_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        if let Some(path) = history_file {
            self.history_file = path;
        }
        self
    }
}
