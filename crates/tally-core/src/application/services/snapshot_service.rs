//! Snapshot Service - runs store operations against any `SnapshotStore`.
//!
//! The service owns its store. It adds no semantics of its own beyond
//! reporting what each operation observed.

use tracing::{debug, instrument};

use crate::{
    application::ports::SnapshotStore,
    domain::{Lookup, OpOutcome, Record, StoreOp},
};

/// Service for snapshot store operations.
pub struct SnapshotService {
    store: Box<dyn SnapshotStore>,
}

impl SnapshotService {
    /// Create a new snapshot service over `store`.
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Insert or overwrite `key`.
    pub fn put(&mut self, key: &str, record: Record) {
        self.store.put(key, record);
    }

    /// Look `key` up.
    pub fn get(&self, key: &str) -> Lookup {
        self.store.get(key)
    }

    /// Remove `key` if present.
    pub fn delete(&mut self, key: &str) {
        self.store.delete(key);
    }

    /// Run one operation and describe what it saw.
    #[instrument(skip_all, fields(op = %op))]
    pub fn apply(&mut self, op: StoreOp) -> OpOutcome {
        let outcome = match op {
            StoreOp::Put { key, record } => {
                let replaced = self.store.get(&key).is_found();
                self.store.put(&key, record);
                OpOutcome::Stored {
                    key,
                    record,
                    replaced,
                }
            }
            StoreOp::Get { key } => {
                let lookup = self.store.get(&key);
                OpOutcome::looked(key, lookup)
            }
            StoreOp::Delete { key } => {
                let existed = self.store.get(&key).is_found();
                self.store.delete(&key);
                OpOutcome::Deleted { key, existed }
            }
        };
        debug!(%outcome, "store op applied");
        outcome
    }

    /// Run `ops` in order, returning one outcome per op.
    pub fn run_script<I>(&mut self, ops: I) -> Vec<OpOutcome>
    where
        I: IntoIterator<Item = StoreOp>,
    {
        ops.into_iter().map(|op| self.apply(op)).collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys()
    }

    /// Hand the store back.
    pub fn into_inner(self) -> Box<dyn SnapshotStore> {
        self.store
    }
}
