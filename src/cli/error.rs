//! REPL error types.

use crate::calculator::CalculatorError;
use crate::persistence::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed input typed at the prompt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid command format. Use: <operation> <a> <b>")]
    InvalidFormat,

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Command '{0}' takes no arguments.")]
    UnexpectedArguments(String),
}

/// Everything that can go wrong while handling one line or running the loop
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calculation(#[from] CalculatorError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("History is unavailable: {0}")]
    HistoryUnavailable(String),

    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
