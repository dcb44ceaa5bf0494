//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing history files
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be opened, written or renamed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line is not the expected column header
    #[error("Malformed history file {path}: expected header 'operand_a,operand_b,operation,result', found '{found}'")]
    Header { path: PathBuf, found: String },

    /// A row could not be encoded or decoded
    #[error("Malformed history file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row names an operation the calculator does not know
    #[error("Unknown operation '{operation}' in {path} at row {row}")]
    UnknownOperation {
        path: PathBuf,
        row: usize,
        operation: String,
    },
}
