//! Operation error types.

use thiserror::Error;

/// Domain failures raised by the registry or by an operation.
///
/// Display strings are user-facing and shown verbatim by the REPL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("Cannot perform modulus by zero.")]
    ModulusByZero,

    #[error("Cannot perform integer division by zero.")]
    IntegerDivisionByZero,

    #[error("Cannot calculate percentage with a zero denominator.")]
    PercentageOfZero,

    #[error("Cannot calculate an even root of a negative number.")]
    EvenRootOfNegative,

    #[error("Cannot calculate a zeroth root.")]
    ZerothRoot,

    #[error("Cannot raise zero to a negative power.")]
    ZeroToNegativePower,

    #[error("Cannot raise a negative number to a fractional power.")]
    NegativeToFractionalPower,

    #[error("Result is out of range.")]
    OutOfRange,
}
