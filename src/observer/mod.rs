//! Calculation observers and the hub that notifies them.
//!
//! The calculator never performs side effects itself. After each
//! successful calculation it hands the record to a [`NotificationHub`],
//! which calls every attached [`CalculationObserver`] in attachment order
//! on the calling thread.
//!
//! # Example
//!
//! ```rust
//! use recalc::core::Calculation;
//! use recalc::observer::{CalculationObserver, NotificationHub, ObserverError};
//! use rust_decimal::Decimal;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Counter(Mutex<usize>);
//!
//! impl CalculationObserver for Counter {
//!     fn name(&self) -> &str {
//!         "counter"
//!     }
//!
//!     fn receive(&self, _calculation: &Calculation) -> Result<(), ObserverError> {
//!         *self.0.lock().unwrap() += 1;
//!         Ok(())
//!     }
//! }
//!
//! let counter = Arc::new(Counter::default());
//! let mut hub = NotificationHub::new();
//! hub.attach(counter.clone());
//!
//! let calc = Calculation::new(Decimal::ONE, Decimal::ONE, "add", Decimal::TWO);
//! hub.notify(&calc).unwrap();
//! assert_eq!(*counter.0.lock().unwrap(), 1);
//! ```

mod autosave;
pub mod error;
mod logging;
mod recorder;

pub use autosave::AutoSaveObserver;
pub use error::{NotifyError, ObserverError, ObserverFailure};
pub use logging::LoggingObserver;
pub use recorder::HistoryRecorder;

use crate::core::Calculation;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Receiver of successful calculations.
pub trait CalculationObserver: Send + Sync {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Handle one calculation.
    fn receive(&self, calculation: &Calculation) -> Result<(), ObserverError>;
}

/// Ordered set of observers, compared by identity.
#[derive(Default)]
pub struct NotificationHub {
    observers: Vec<Arc<dyn CalculationObserver>>,
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|observer| observer.name()))
            .finish()
    }
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `observer` unless this same instance is already attached.
    ///
    /// Returns `true` if it was added.
    pub fn attach(&mut self, observer: Arc<dyn CalculationObserver>) -> bool {
        if self.position(&observer).is_some() {
            return false;
        }
        debug!(observer = observer.name(), "attached observer");
        self.observers.push(observer);
        true
    }

    /// Detach `observer` if attached. Returns `true` if it was removed.
    pub fn detach(&mut self, observer: &Arc<dyn CalculationObserver>) -> bool {
        match self.position(observer) {
            Some(index) => {
                let removed = self.observers.remove(index);
                debug!(observer = removed.name(), "detached observer");
                true
            }
            None => false,
        }
    }

    fn position(&self, observer: &Arc<dyn CalculationObserver>) -> Option<usize> {
        self.observers
            .iter()
            .position(|attached| Arc::ptr_eq(attached, observer))
    }

    /// Deliver `calculation` to every observer in attachment order.
    ///
    /// Each observer runs even if an earlier one failed; all failures are
    /// returned together.
    pub fn notify(&self, calculation: &Calculation) -> Result<(), NotifyError> {
        let failures: Vec<ObserverFailure> = self
            .observers
            .iter()
            .filter_map(|observer| {
                observer
                    .receive(calculation)
                    .err()
                    .map(|error| ObserverFailure {
                        observer: observer.name().to_string(),
                        error,
                    })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError { failures })
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
