//! Accumulator Service - named accumulators for drivers.
//!
//! Every name maps to its own [`Accumulator`]. Nothing is shared between
//! entries, so advancing one name never moves another.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{Accumulator, create_accumulator},
    error::TallyResult,
};

/// One round of [`AccumulatorService::paired_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairedRow {
    pub round: i64,
    pub pos: i64,
    pub neg: i64,
}

/// Service owning a set of named accumulators.
#[derive(Debug, Default)]
pub struct AccumulatorService {
    accumulators: BTreeMap<String, Accumulator>,
}

impl AccumulatorService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh accumulator under `name`, replacing any existing one.
    ///
    /// Returns the total the replaced accumulator had reached, if any.
    pub fn create(&mut self, name: impl Into<String>) -> Option<i64> {
        let name = name.into();
        debug!(%name, "accumulator created");
        self.accumulators
            .insert(name, create_accumulator())
            .map(|old| old.total())
    }

    /// Advance `name` by `delta`.
    pub fn add(&mut self, name: &str, delta: i64) -> TallyResult<i64> {
        let acc = self
            .accumulators
            .get_mut(name)
            .ok_or_else(|| ApplicationError::UnknownAccumulator { name: name.into() })?;
        Ok(acc.add(delta))
    }

    /// Advance `name` by `delta`, failing instead of wrapping.
    pub fn checked_add(&mut self, name: &str, delta: i64) -> TallyResult<i64> {
        let acc = self
            .accumulators
            .get_mut(name)
            .ok_or_else(|| ApplicationError::UnknownAccumulator { name: name.into() })?;
        Ok(acc.checked_add(delta)?)
    }

    pub fn total(&self, name: &str) -> TallyResult<i64> {
        self.accumulators
            .get(name)
            .map(Accumulator::total)
            .ok_or_else(|| ApplicationError::UnknownAccumulator { name: name.into() }.into())
    }

    /// Two fresh accumulators fed side by side: `pos` gets `i`, `neg` gets
    /// `-2 * i`, for `i` in `0..rounds`.
    #[instrument]
    pub fn paired_run(rounds: u32) -> Vec<PairedRow> {
        let mut pos = create_accumulator();
        let mut neg = create_accumulator();

        (0..i64::from(rounds))
            .map(|i| PairedRow {
                round: i,
                pos: pos.add(i),
                neg: neg.add(-2 * i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::TallyError;

    #[test]
    fn named_accumulators_are_independent() {
        let mut svc = AccumulatorService::new();
        svc.create("a");
        svc.create("b");

        assert_eq!(svc.add("a", 5).unwrap(), 5);
        assert_eq!(svc.add("a", -2).unwrap(), 3);
        assert_eq!(svc.total("b").unwrap(), 0);
        assert_eq!(svc.add("b", 0).unwrap(), 0);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let mut svc = AccumulatorService::new();
        let err = svc.add("nope", 1).unwrap_err();
        assert_eq!(
            err,
            TallyError::Application(ApplicationError::UnknownAccumulator {
                name: "nope".into()
            })
        );
        assert!(svc.total("nope").is_err());
    }

    #[test]
    fn create_resets_and_reports_previous_total() {
        let mut svc = AccumulatorService::new();
        assert_eq!(svc.create("a"), None);
        svc.add("a", 42).unwrap();
        assert_eq!(svc.create("a"), Some(42));
        assert_eq!(svc.total("a").unwrap(), 0);
    }

    #[test]
    fn checked_add_surfaces_overflow() {
        let mut svc = AccumulatorService::new();
        svc.create("a");
        svc.add("a", i64::MAX).unwrap();
        assert!(matches!(
            svc.checked_add("a", 1),
            Err(TallyError::Domain(DomainError::Overflow { .. }))
        ));
        assert_eq!(svc.total("a").unwrap(), i64::MAX);
    }

    #[test]
    fn paired_run_matches_closure_demo() {
        let rows = AccumulatorService::paired_run(10);
        assert_eq!(rows.len(), 10);
        assert_eq!(
            rows[0],
            PairedRow {
                round: 0,
                pos: 0,
                neg: 0
            }
        );
        assert_eq!(
            rows[3],
            PairedRow {
                round: 3,
                pos: 6,
                neg: -12
            }
        );
        assert_eq!(
            rows[9],
            PairedRow {
                round: 9,
                pos: 45,
                neg: -90
            }
        );
    }

    #[test]
    fn paired_run_of_zero_rounds_is_empty() {
        assert!(AccumulatorService::paired_run(0).is_empty());
    }
}
