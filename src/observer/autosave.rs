//! Rewrites the full history file after every calculation.

use super::{CalculationObserver, ObserverError};
use crate::core::{Calculation, SharedHistory};
use crate::persistence;
use std::path::PathBuf;
use tracing::info;

/// Observer that overwrites a CSV file with the whole shared history on
/// every notification.
///
/// The file receives the history as it stands when the observer runs, so
/// attach it after anything that records the calculation into that
/// history (see [`HistoryRecorder`](super::HistoryRecorder)).
#[derive(Debug, Clone)]
pub struct AutoSaveObserver {
    history: SharedHistory,
    path: PathBuf,
}

impl AutoSaveObserver {
    pub fn new(history: SharedHistory, path: impl Into<PathBuf>) -> Self {
        Self {
            history,
            path: path.into(),
        }
    }
}

impl CalculationObserver for AutoSaveObserver {
    fn name(&self) -> &str {
        "auto-save"
    }

    fn receive(&self, _calculation: &Calculation) -> Result<(), ObserverError> {
        let history = self
            .history
            .lock()
            .map_err(|err| ObserverError::HistoryUnavailable(err.to_string()))?;
        persistence::write_calculations(&self.path, history.calculations())?;
        info!(path = %self.path.display(), rows = history.len(), "history auto-saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::History;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn calc(a: i64, b: i64, result: i64) -> Calculation {
        Calculation::new(Decimal::from(a), Decimal::from(b), "add", Decimal::from(result))
    }

    #[test]
    fn writes_entire_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosave.csv");
        let history = Arc::new(Mutex::new(History::new()));
        history.lock().unwrap().add_calculation(calc(100, 50, 150));
        history.lock().unwrap().add_calculation(calc(1, 2, 3));

        let saver = AutoSaveObserver::new(Arc::clone(&history), &path);
        saver.receive(&calc(1, 2, 3)).unwrap();

        let rows = persistence::read_calculations(&path).unwrap();
        assert_eq!(rows, vec![calc(100, 50, 150), calc(1, 2, 3)]);
    }

    #[test]
    fn each_notification_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosave.csv");
        let history = Arc::new(Mutex::new(History::new()));
        let saver = AutoSaveObserver::new(Arc::clone(&history), &path);

        history.lock().unwrap().add_calculation(calc(1, 1, 2));
        saver.receive(&calc(1, 1, 2)).unwrap();
        history.lock().unwrap().add_calculation(calc(2, 2, 4));
        saver.receive(&calc(2, 2, 4)).unwrap();
        history.lock().unwrap().undo();
        history.lock().unwrap().add_calculation(calc(3, 3, 6));
        saver.receive(&calc(3, 3, 6)).unwrap();

        let rows = persistence::read_calculations(&path).unwrap();
        assert_eq!(rows, vec![calc(1, 1, 2), calc(3, 3, 6)]);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("autosave.csv");
        let history = Arc::new(Mutex::new(History::new()));
        history.lock().unwrap().add_calculation(calc(1, 1, 2));

        let saver = AutoSaveObserver::new(history, path);
        assert!(matches!(
            saver.receive(&calc(1, 1, 2)),
            Err(ObserverError::Persistence(_))
        ));
    }
}
