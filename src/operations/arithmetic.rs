//! The built-in binary operations.

use super::error::OperationError;
use super::Operation;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

/// Upper bound on Newton steps when extracting an integral root.
const MAX_NEWTON_ITERATIONS: usize = 200;

/// Scales tried, coarsest last, when snapping an approximate root to an
/// exact value.
const SNAP_SCALES: [u32; 4] = [24, 20, 16, 12];

/// `a + b`
#[derive(Clone, Copy, Debug, Default)]
pub struct Add;

impl Operation for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        a.checked_add(b).ok_or(OperationError::OutOfRange)
    }
}

/// `a - b`
#[derive(Clone, Copy, Debug, Default)]
pub struct Subtract;

impl Operation for Subtract {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        a.checked_sub(b).ok_or(OperationError::OutOfRange)
    }
}

/// `a * b`
#[derive(Clone, Copy, Debug, Default)]
pub struct Multiply;

impl Operation for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        a.checked_mul(b).ok_or(OperationError::OutOfRange)
    }
}

/// `a / b`
#[derive(Clone, Copy, Debug, Default)]
pub struct Divide;

impl Operation for Divide {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if b.is_zero() {
            return Err(OperationError::DivisionByZero);
        }
        a.checked_div(b).ok_or(OperationError::OutOfRange)
    }
}

/// `a ^ b`, for integral, fractional and negative exponents.
#[derive(Clone, Copy, Debug, Default)]
pub struct Power;

impl Operation for Power {
    fn name(&self) -> &'static str {
        "power"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if b.is_zero() {
            return Ok(Decimal::ONE);
        }
        if a.is_zero() {
            return if b.is_sign_negative() {
                Err(OperationError::ZeroToNegativePower)
            } else {
                Ok(Decimal::ZERO)
            };
        }
        if is_integral(b) {
            if a == Decimal::ONE || (a == Decimal::NEGATIVE_ONE && is_even(b)) {
                return Ok(Decimal::ONE);
            }
            if a == Decimal::NEGATIVE_ONE {
                return Ok(Decimal::NEGATIVE_ONE);
            }
            return match b.to_i64() {
                Some(exponent) => a.checked_powi(exponent).ok_or(OperationError::OutOfRange),
                None => wide_integral_power(a, b),
            };
        }
        if a.is_sign_negative() {
            return Err(OperationError::NegativeToFractionalPower);
        }

        // x^(1/n) goes through the exact root path so that 9^0.5 is 3.
        if let Some(index) = reciprocal_index(b) {
            return signed_root(a, index);
        }
        a.checked_powd(b).ok_or(OperationError::OutOfRange)
    }
}

/// `a ^ (1/b)`, keeping the sign for odd roots of negative numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Root;

impl Operation for Root {
    fn name(&self) -> &'static str {
        "root"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if a.is_sign_negative() && is_even(b) {
            return Err(OperationError::EvenRootOfNegative);
        }
        if b.is_zero() {
            return Err(OperationError::ZerothRoot);
        }
        // Indices beyond i64 take the fractional path below.
        if let Some(index) = b.to_i64().filter(|_| is_integral(b)) {
            return signed_root(a, index);
        }

        if a.is_zero() {
            return if b.is_sign_negative() {
                Err(OperationError::ZeroToNegativePower)
            } else {
                Ok(Decimal::ZERO)
            };
        }
        let exponent = Decimal::ONE
            .checked_div(b)
            .ok_or(OperationError::OutOfRange)?;
        let magnitude = a
            .abs()
            .checked_powd(exponent)
            .ok_or(OperationError::OutOfRange)?;
        Ok(if a.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        })
    }
}

/// `a mod b`; the remainder takes the sign of `a`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Modulus;

impl Operation for Modulus {
    fn name(&self) -> &'static str {
        "modulus"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if b.is_zero() {
            return Err(OperationError::ModulusByZero);
        }
        a.checked_rem(b).ok_or(OperationError::OutOfRange)
    }
}

/// `floor(a / b)`
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerDivide;

impl Operation for IntegerDivide {
    fn name(&self) -> &'static str {
        "int_divide"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if b.is_zero() {
            return Err(OperationError::IntegerDivisionByZero);
        }

        // (a - a mod b) / b is an exact integer, unlike a rounded a / b.
        let remainder = a.checked_rem(b).ok_or(OperationError::OutOfRange)?;
        let truncated = a
            .checked_sub(remainder)
            .and_then(|exact| exact.checked_div(b))
            .ok_or(OperationError::OutOfRange)?
            .trunc();

        if !remainder.is_zero() && (remainder.is_sign_negative() != b.is_sign_negative()) {
            truncated
                .checked_sub(Decimal::ONE)
                .ok_or(OperationError::OutOfRange)
        } else {
            Ok(truncated)
        }
    }
}

/// `(a / b) * 100`
#[derive(Clone, Copy, Debug, Default)]
pub struct Percentage;

impl Operation for Percentage {
    fn name(&self) -> &'static str {
        "percent"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        if b.is_zero() {
            return Err(OperationError::PercentageOfZero);
        }
        a.checked_div(b)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(OperationError::OutOfRange)
    }
}

/// `|a - b|`
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteDifference;

impl Operation for AbsoluteDifference {
    fn name(&self) -> &'static str {
        "abs_diff"
    }

    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        a.checked_sub(b)
            .map(|difference| difference.abs())
            .ok_or(OperationError::OutOfRange)
    }
}

/// `a^b` for an integral `b` too wide for `checked_powi`.
fn wide_integral_power(a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
    let magnitude = a
        .abs()
        .checked_powd(b)
        .ok_or(OperationError::OutOfRange)?;
    Ok(if a.is_sign_negative() && !is_even(b) {
        -magnitude
    } else {
        magnitude
    })
}

fn is_integral(value: Decimal) -> bool {
    value.fract().is_zero()
}

fn is_even(value: Decimal) -> bool {
    value
        .checked_rem(Decimal::TWO)
        .is_some_and(|remainder| remainder.is_zero())
}

/// `Some(n)` when `exponent == 1/n` for a non-zero integer `n`.
fn reciprocal_index(exponent: Decimal) -> Option<i64> {
    let reciprocal = Decimal::ONE.checked_div(exponent)?;
    if is_integral(reciprocal) {
        reciprocal.to_i64().filter(|index| *index != 0)
    } else {
        None
    }
}

/// The real `index`-th root of `value`; `index` is non-zero and odd
/// whenever `value` is negative.
fn signed_root(value: Decimal, index: i64) -> Result<Decimal, OperationError> {
    let magnitude = positive_root(value.abs(), index.unsigned_abs())?;
    let root = if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    };

    if index > 0 {
        Ok(root)
    } else if root.is_zero() {
        Err(OperationError::ZeroToNegativePower)
    } else {
        Decimal::ONE
            .checked_div(root)
            .ok_or(OperationError::OutOfRange)
    }
}

/// Newton iteration for `value^(1/index)` with `value >= 0`, `index >= 1`.
fn positive_root(value: Decimal, index: u64) -> Result<Decimal, OperationError> {
    if value.is_zero() || value == Decimal::ONE || index == 1 {
        return Ok(value);
    }

    let n = Decimal::from(index);
    let n_minus_one = n - Decimal::ONE;
    let mut current = value
        .to_f64()
        .map(|v| v.powf(1.0 / index as f64))
        .and_then(Decimal::from_f64)
        .filter(|guess| !guess.is_zero())
        .unwrap_or(Decimal::ONE);

    for _ in 0..MAX_NEWTON_ITERATIONS {
        let next = current
            .checked_powu(index - 1)
            .and_then(|power| value.checked_div(power))
            .and_then(|quotient| {
                n_minus_one
                    .checked_mul(current)
                    .and_then(|scaled| scaled.checked_add(quotient))
            })
            .and_then(|sum| sum.checked_div(n))
            .ok_or(OperationError::OutOfRange)?;

        if next == current {
            break;
        }
        current = next;
    }

    Ok(snap_root(current, value, index))
}

/// Replace a root approximation by a short exact value when one raises
/// back to `value` exactly.
fn snap_root(approximation: Decimal, value: Decimal, index: u64) -> Decimal {
    SNAP_SCALES
        .iter()
        .map(|scale| approximation.round_dp(*scale).normalize())
        .find(|candidate| candidate.checked_powu(index) == Some(value))
        .unwrap_or(approximation)
}
