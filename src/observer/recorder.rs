//! Pushes calculations into the shared history.

use super::{CalculationObserver, ObserverError};
use crate::core::{Calculation, SharedHistory};

/// Observer that appends every calculation to a [`SharedHistory`].
///
/// The REPL attaches this first so that observers running after it, such
/// as [`AutoSaveObserver`](super::AutoSaveObserver), see the new record.
#[derive(Debug, Clone)]
pub struct HistoryRecorder {
    history: SharedHistory,
}

impl HistoryRecorder {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }
}

impl CalculationObserver for HistoryRecorder {
    fn name(&self) -> &str {
        "history"
    }

    fn receive(&self, calculation: &Calculation) -> Result<(), ObserverError> {
        self.history
            .lock()
            .map_err(|err| ObserverError::HistoryUnavailable(err.to_string()))?
            .add_calculation(calculation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::History;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    #[test]
    fn records_into_shared_history() {
        let history = Arc::new(Mutex::new(History::new()));
        let recorder = HistoryRecorder::new(Arc::clone(&history));
        let calc = Calculation::new(Decimal::ONE, Decimal::ONE, "add", Decimal::TWO);

        recorder.receive(&calc).unwrap();

        let history = history.lock().unwrap();
        assert_eq!(history.calculations(), &[calc]);
        assert!(history.can_undo());
    }
}
