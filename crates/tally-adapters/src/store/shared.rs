//! Thread-safe wrapper around any snapshot store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::{
    application::{ApplicationError, ports::SnapshotStore},
    domain::{Lookup, Record},
    error::TallyResult,
};

use crate::InMemoryStore;

/// Cloneable, lock-guarded handle over a [`SnapshotStore`].
///
/// Clones share the same underlying store. The only failure mode is a lock
/// poisoned by a panicking writer; a missing key is still
/// [`Lookup::NotFound`].
#[derive(Debug)]
pub struct SharedStore<S = InMemoryStore> {
    inner: Arc<RwLock<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedStore<InMemoryStore> {
    /// Create a new shared store over an empty [`InMemoryStore`].
    pub fn new() -> Self {
        Self::wrap(InMemoryStore::new())
    }
}

impl Default for SharedStore<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SnapshotStore> SharedStore<S> {
    /// Share an existing store.
    pub fn wrap(store: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> TallyResult<RwLockReadGuard<'_, S>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> TallyResult<RwLockWriteGuard<'_, S>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    pub fn put(&self, key: &str, record: Record) -> TallyResult<()> {
        self.write()?.put(key, record);
        Ok(())
    }

    pub fn get(&self, key: &str) -> TallyResult<Lookup> {
        Ok(self.read()?.get(key))
    }

    pub fn delete(&self, key: &str) -> TallyResult<()> {
        self.write()?.delete(key);
        Ok(())
    }

    pub fn len(&self) -> TallyResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> TallyResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub fn keys(&self) -> TallyResult<Vec<String>> {
        Ok(self.read()?.keys())
    }

    pub fn clear(&self) -> TallyResult<()> {
        self.write()?.clear();
        Ok(())
    }

    /// Run `f` with exclusive access, e.g. for read-modify-write sequences
    /// that must not interleave with other writers.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> TallyResult<R> {
        let mut guard = self.write()?;
        Ok(f(&mut guard))
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> TallyResult<S>
    where
        S: Clone,
    {
        Ok(self.read()?.clone())
    }
}
