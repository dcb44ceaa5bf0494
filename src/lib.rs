//! Recalc: a decimal calculator with undoable history
//!
//! Recalc separates running a calculation from what happens because of it.
//! The calculator executes a named operation over two exact decimals and
//! hands the resulting record to its observers; logging, history recording
//! and auto-saving are all observers.
//!
//! # Core Concepts
//!
//! - **Operations**: pure named functions over `rust_decimal::Decimal`
//! - **Calculations**: immutable records of one executed operation
//! - **History**: the live sequence plus snapshot stacks for undo/redo
//! - **Observers**: receivers notified synchronously after each calculation
//!
//! # Example
//!
//! ```rust
//! use recalc::calculator::Calculator;
//! use recalc::core::{History, HistoryOutcome};
//! use rust_decimal::Decimal;
//!
//! let calculator = Calculator::new();
//! let mut history = History::new();
//!
//! let calc = calculator
//!     .calculate(Decimal::from(10), Decimal::from(5), "add")
//!     .unwrap();
//! history.add_calculation(calc);
//!
//! let calc = calculator
//!     .calculate(Decimal::from(-8), Decimal::from(3), "root")
//!     .unwrap();
//! assert_eq!(calc.result, Decimal::from(-2));
//! history.add_calculation(calc);
//!
//! assert_eq!(history.undo(), HistoryOutcome::Undone);
//! assert_eq!(history.len(), 1);
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod core;
pub mod observer;
pub mod operations;
pub mod persistence;

// Re-export commonly used types
pub use calculator::{Calculator, CalculatorError};
pub use config::Config;
pub use crate::core::{Calculation, History, HistoryOutcome, SharedHistory, Snapshot};
pub use observer::{CalculationObserver, NotificationHub};
pub use operations::{Operation, OperationError, OperationRegistry};
