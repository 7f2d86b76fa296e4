//! Running-total accumulators.
//!
//! An [`Accumulator`] owns exactly one private `i64`. The only way to move it
//! is [`Accumulator::add`] (or its checked twin), so two accumulators built by
//! the same factory can never observe each other's state.

use crate::domain::error::DomainError;

/// A handle over a single running total.
///
/// Not `Clone`: every handle owns a distinct total.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    total: i64,
}

impl Accumulator {
    /// A fresh accumulator with a total of `0`.
    pub const fn new() -> Self {
        Self { total: 0 }
    }

    /// Advance the total by `delta` and return the new total.
    ///
    /// Wraps on `i64` overflow instead of panicking.
    pub fn add(&mut self, delta: i64) -> i64 {
        self.total = self.total.wrapping_add(delta);
        tracing::trace!(delta, total = self.total, "accumulator advanced");
        self.total
    }

    /// Like [`Self::add`], but refuses to wrap.
    ///
    /// On overflow the total is left untouched.
    pub fn checked_add(&mut self, delta: i64) -> Result<i64, DomainError> {
        let next = self
            .total
            .checked_add(delta)
            .ok_or(DomainError::Overflow {
                total: self.total,
                delta,
            })?;
        self.total = next;
        Ok(next)
    }

    /// Current total, without advancing it.
    pub const fn total(&self) -> i64 {
        self.total
    }
}

/// Factory for fresh accumulators.
pub fn create_accumulator() -> Accumulator {
    Accumulator::new()
}

/// Closure form of the factory.
///
/// Each call returns a new adder with its own total moved inside it.
pub fn make_adder() -> impl FnMut(i64) -> i64 {
    let mut acc = Accumulator::new();
    move |delta| acc.add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_accumulator_starts_at_zero() {
        let acc = create_accumulator();
        assert_eq!(acc.total(), 0);
        assert_eq!(acc, Accumulator::default());
    }

    #[test]
    fn add_returns_running_total() {
        let mut acc = create_accumulator();
        assert_eq!(acc.add(5), 5);
        assert_eq!(acc.add(-2), 3);
        assert_eq!(acc.add(0), 3);
        assert_eq!(acc.total(), 3);
    }

    #[test]
    fn final_total_is_the_sum_of_deltas() {
        let deltas = [7, -3, 12, 0, -40, 1_000, i64::from(i32::MIN)];
        let mut acc = create_accumulator();
        let mut last = 0;
        for d in deltas {
            last = acc.add(d);
        }
        assert_eq!(last, deltas.iter().sum::<i64>());
    }

    #[test]
    fn accumulators_are_independent() {
        let mut a = create_accumulator();
        let mut b = create_accumulator();

        b.add(11);
        let before = b.total();
        for i in 0..100 {
            a.add(i);
        }
        assert_eq!(b.add(0), before);
        assert_eq!(a.total(), (0..100).sum::<i64>());
    }

    #[test]
    fn add_wraps_on_overflow() {
        let mut acc = create_accumulator();
        acc.add(i64::MAX);
        assert_eq!(acc.add(1), i64::MIN);
    }

    #[test]
    fn checked_add_reports_overflow_and_keeps_total() {
        let mut acc = create_accumulator();
        acc.add(i64::MAX - 1);

        let err = acc.checked_add(2).unwrap_err();
        assert_eq!(
            err,
            DomainError::Overflow {
                total: i64::MAX - 1,
                delta: 2
            }
        );
        assert_eq!(acc.total(), i64::MAX - 1);
        assert_eq!(acc.checked_add(1).unwrap(), i64::MAX);
    }

    #[test]
    fn adders_close_over_their_own_total() {
        let mut pos = make_adder();
        let mut neg = make_adder();

        assert_eq!(pos(1), 1);
        assert_eq!(neg(-2), -2);
        assert_eq!(pos(2), 3);
        assert_eq!(neg(-4), -6);
        assert_eq!(pos(0), 3);
    }
}
