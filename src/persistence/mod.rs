//! CSV persistence for calculation sequences.
//!
//! History files have a mandatory header row followed by one row per
//! calculation:
//!
//! ```text
//! operand_a,operand_b,operation,result
//! 100,50,add,150
//! ```
//!
//! Decimals are written and parsed as exact decimal text, so `150` stays
//! `150` and `0.1` stays `0.1` across a save/load cycle.

use crate::core::Calculation;
use crate::operations::OperationRegistry;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod error;

pub use error::PersistenceError;

/// Column names, in file order.
pub const HEADER: [&str; 4] = ["operand_a", "operand_b", "operation", "result"];

/// Write `calculations` to `path`, replacing any existing file.
///
/// Rows are written to a sibling temporary file that is renamed over
/// `path` once complete, so readers never observe a half-written file.
pub fn write_calculations(path: &Path, calculations: &[Calculation]) -> Result<(), PersistenceError> {
    let temp_path = temp_path_for(path);

    let written = write_rows(&temp_path, calculations)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|source| io_error(path, source)));
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    debug!(path = %path.display(), rows = calculations.len(), "wrote history file");
    Ok(())
}

fn write_rows(path: &Path, calculations: &[Calculation]) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|source| csv_error(path, source))?;
    for calculation in calculations {
        writer
            .serialize(calculation)
            .map_err(|source| csv_error(path, source))?;
    }
    writer.flush().map_err(|source| io_error(path, source))
}

/// Read every row of the history file at `path`, in file order.
///
/// The first line must be exactly [`HEADER`]. Either all rows parse and name a registered operation, or an error is
/// returned and nothing is produced.
pub fn read_calculations(path: &Path) -> Result<Vec<Calculation>, PersistenceError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?;
    if !headers.iter().eq(HEADER) {
        return Err(PersistenceError::Header {
            path: path.to_path_buf(),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let registry = OperationRegistry::standard();
    let mut calculations = Vec::new();

    for (index, row) in reader.deserialize::<Calculation>().enumerate() {
        let calculation = row.map_err(|source| csv_error(path, source))?;
        if !registry.contains(&calculation.operation) {
            return Err(PersistenceError::UnknownOperation {
                path: path.to_path_buf(),
                row: index + 1,
                operation: calculation.operation,
            });
        }
        calculations.push(calculation);
    }

    debug!(path = %path.display(), rows = calculations.len(), "read history file");
    Ok(calculations)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
