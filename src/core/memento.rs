//! Immutable snapshots of the calculation sequence.

use super::calculation::Calculation;

/// Independently owned copy of the calculation sequence at one point in time.
///
/// A snapshot clones the sequence when it is captured, so later changes to
/// the live history never reach it. There is no way to mutate a snapshot
/// after construction; restoring hands out a fresh copy.
///
/// # Example
///
/// ```rust
/// use recalc::core::{Calculation, Snapshot};
/// use rust_decimal::Decimal;
///
/// let mut live = vec![Calculation::new(Decimal::ONE, Decimal::ONE, "add", Decimal::TWO)];
/// let snapshot = Snapshot::capture(&live);
///
/// live.clear();
/// assert_eq!(snapshot.state().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    state: Vec<Calculation>,
}

impl Snapshot {
    /// Capture a copy of `calculations`.
    pub fn capture(calculations: &[Calculation]) -> Self {
        Self {
            state: calculations.to_vec(),
        }
    }

    /// The captured sequence.
    pub fn state(&self) -> &[Calculation] {
        &self.state
    }

    /// A fresh, owned copy of the captured sequence.
    pub fn restore(&self) -> Vec<Calculation> {
        self.state.clone()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn calc(n: i64) -> Calculation {
        Calculation::new(Decimal::from(n), Decimal::ONE, "add", Decimal::from(n + 1))
    }

    #[test]
    fn capture_is_independent_of_source() {
        let mut live = vec![calc(1), calc(2)];
        let snapshot = Snapshot::capture(&live);

        live.push(calc(3));
        live[0] = calc(9);

        assert_eq!(snapshot.state(), &[calc(1), calc(2)]);
    }

    #[test]
    fn restore_does_not_alias_snapshot() {
        let snapshot = Snapshot::capture(&[calc(1)]);

        let mut restored = snapshot.restore();
        restored.push(calc(2));
        restored[0] = calc(5);

        assert_eq!(snapshot.state(), &[calc(1)]);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = Snapshot::capture(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, Snapshot::default());
    }
}
