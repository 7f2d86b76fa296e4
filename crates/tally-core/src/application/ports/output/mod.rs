//! Driven (output) ports - implemented by infrastructure.
//!
//! The `tally-adapters` crate provides implementations.

use crate::domain::{Lookup, Record};

/// Port for keyed record storage.
///
/// Implemented by:
/// - `tally_adapters::InMemoryStore` (single owner)
/// - `tally_adapters::SharedStore` exposes the same operations behind a lock
///
/// ## Contract
///
/// - `put` inserts or overwrites; it cannot fail.
/// - `get` reports absence as [`Lookup::NotFound`], never as an error.
/// - `delete` of an absent key is a no-op and leaves other entries alone.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send {
    /// Insert `record` under `key`, replacing any previous record.
    fn put(&mut self, key: &str, record: Record);

    /// Look `key` up.
    fn get(&self, key: &str) -> Lookup;

    /// Remove `key` if present.
    fn delete(&mut self, key: &str);

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// Remove every entry.
    fn clear(&mut self);
}
