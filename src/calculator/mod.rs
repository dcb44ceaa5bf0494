//! The calculator: operation lookup, execution and observer notification.
//!
//! # Example
//!
//! ```rust
//! use recalc::calculator::Calculator;
//! use rust_decimal::Decimal;
//!
//! let calculator = Calculator::new();
//!
//! let calc = calculator
//!     .calculate(Decimal::from(10), Decimal::from(5), "add")
//!     .unwrap();
//! assert_eq!(calc.result, Decimal::from(15));
//!
//! let err = calculator
//!     .calculate(Decimal::from(10), Decimal::ZERO, "divide")
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Error during calculation: Cannot divide by zero.");
//! ```

pub mod error;

pub use error::CalculatorError;

use crate::core::Calculation;
use crate::observer::{CalculationObserver, NotificationHub};
use crate::operations::OperationRegistry;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs named operations and announces each result to its observers.
///
/// The calculator does not keep history. Whoever needs one records the
/// returned [`Calculation`] or attaches an observer that does.
#[derive(Debug, Default)]
pub struct Calculator {
    registry: OperationRegistry,
    hub: NotificationHub,
}

impl Calculator {
    /// A calculator with the standard operations and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator over a custom operation set.
    pub fn with_registry(registry: OperationRegistry) -> Self {
        Self {
            registry,
            hub: NotificationHub::new(),
        }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// See [`NotificationHub::attach`].
    pub fn attach(&mut self, observer: Arc<dyn CalculationObserver>) -> bool {
        self.hub.attach(observer)
    }

    /// See [`NotificationHub::detach`].
    pub fn detach(&mut self, observer: &Arc<dyn CalculationObserver>) -> bool {
        self.hub.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.hub.len()
    }

    /// Execute `operation` on `a` and `b`, notify every observer, and return
    /// the resulting record.
    ///
    /// Observer failures are logged and do not affect the returned value:
    /// the calculation itself succeeded and every other observer still ran.
    pub fn calculate(
        &self,
        a: Decimal,
        b: Decimal,
        operation: &str,
    ) -> Result<Calculation, CalculatorError> {
        let calculation = self.perform(a, b, operation)?;

        if let Err(err) = self.hub.notify(&calculation) {
            for failure in &err.failures {
                warn!(
                    observer = %failure.observer,
                    error = %failure.error,
                    "observer failed to handle calculation"
                );
            }
        }

        Ok(calculation)
    }

    fn perform(&self, a: Decimal, b: Decimal, operation: &str) -> Result<Calculation, CalculatorError> {
        let result = self
            .registry
            .get(operation)
            .and_then(|op| op.execute(a, b))
            .map_err(CalculatorError::Operation)?;

        debug!(%a, %b, operation, %result, "calculated");
        Ok(Calculation::new(a, b, operation, result))
    }
}
