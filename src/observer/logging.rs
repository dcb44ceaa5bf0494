//! Appends one log line per calculation to a text file.

use super::{CalculationObserver, ObserverError};
use crate::core::Calculation;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Observer that writes
/// `<timestamp> - INFO - Operation: <op>, Operands: (<a>, <b>), Result: <r>`
/// for every calculation.
///
/// The file is opened in append mode when the observer is built and held
/// until it is dropped. Every line is flushed as soon as it is written.
#[derive(Debug)]
pub struct LoggingObserver {
    path: PathBuf,
    file: Mutex<File>,
}

impl LoggingObserver {
    /// Open (creating if needed) the log file at `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    fn format_line(calculation: &Calculation) -> String {
        format!(
            "{} - INFO - Operation: {}, Operands: ({}, {}), Result: {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            calculation.operation,
            calculation.a,
            calculation.b,
            calculation.result
        )
    }
}

impl CalculationObserver for LoggingObserver {
    fn name(&self) -> &str {
        "logging"
    }

    fn receive(&self, calculation: &Calculation) -> Result<(), ObserverError> {
        let line = Self::format_line(calculation);
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        debug!(path = %self.path.display(), operation = %calculation.operation, "calculation logged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn calc() -> Calculation {
        Calculation::new(Decimal::from(10), Decimal::from(5), "add", Decimal::from(15))
    }

    #[test]
    fn writes_one_line_per_calculation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calculator.log");
        let observer = LoggingObserver::open(&path).unwrap();

        observer.receive(&calc()).unwrap();
        observer.receive(&calc()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - INFO - Operation: add, Operands: (10, 5), Result: 15"));
    }

    #[test]
    fn line_starts_with_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calculator.log");
        let observer = LoggingObserver::open(&path).unwrap();

        observer.receive(&calc()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let (timestamp, _) = contents.split_once(" - ").unwrap();
        let (seconds, millis) = timestamp.split_once(',').unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S").is_ok(),
            "unexpected timestamp {timestamp:?}"
        );
        assert_eq!(millis.len(), 3);
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn appends_to_existing_log() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calculator.log");
        fs::write(&path, "earlier line\n").unwrap();

        let observer = LoggingObserver::open(&path).unwrap();
        observer.receive(&calc()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier line\n"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("calculator.log");
        assert!(LoggingObserver::open(path).is_err());
    }
}
