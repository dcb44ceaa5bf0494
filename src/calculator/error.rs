//! Calculator error types.

use crate::operations::OperationError;
use thiserror::Error;

/// Errors returned by [`Calculator::calculate`](super::Calculator::calculate)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The operation was unknown or rejected its operands
    #[error("Error during calculation: {0}")]
    Operation(#[source] OperationError),
}

impl CalculatorError {
    /// The underlying operation failure.
    pub fn operation_error(&self) -> &OperationError {
        match self {
            Self::Operation(source) => source,
        }
    }
}
