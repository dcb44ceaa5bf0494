//! The immutable record of one executed operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single successful calculation.
///
/// Calculations are immutable values: once the calculator has built one it
/// is only ever cloned into history snapshots, never modified. Equality is
/// structural over all four fields, and decimal comparison is numeric
/// (`1.0 == 1`).
///
/// The serde field names are the CSV column names used by history files,
/// and decimals are (de)serialized as exact decimal text.
///
/// # Example
///
/// ```rust
/// use recalc::core::Calculation;
/// use rust_decimal::Decimal;
///
/// let calc = Calculation::new(Decimal::from(10), Decimal::from(5), "add", Decimal::from(15));
/// assert_eq!(calc.to_string(), "Calculation(10, 5, 'add') = 15");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    /// First operand
    #[serde(rename = "operand_a", with = "rust_decimal::serde::str")]
    pub a: Decimal,
    /// Second operand
    #[serde(rename = "operand_b", with = "rust_decimal::serde::str")]
    pub b: Decimal,
    /// Registered name of the operation that produced `result`
    pub operation: String,
    /// Value returned by the operation
    #[serde(with = "rust_decimal::serde::str")]
    pub result: Decimal,
}

impl Calculation {
    pub fn new(a: Decimal, b: Decimal, operation: impl Into<String>, result: Decimal) -> Self {
        Self {
            a,
            b,
            operation: operation.into(),
            result,
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculation({}, {}, '{}') = {}",
            self.a, self.b, self.operation, self.result
        )
    }
}
