//! In-memory snapshot store.

use std::collections::HashMap;

use tally_core::{
    application::ports::SnapshotStore,
    domain::{Lookup, Record},
};

/// Single-owner in-memory snapshot store.
///
/// No locking. Wrap it in [`crate::SharedStore`] to share it across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    entries: HashMap<String, Record>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Record)> for InMemoryStore {
    fn from_iter<T: IntoIterator<Item = (String, Record)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl SnapshotStore for InMemoryStore {
    fn put(&mut self, key: &str, record: Record) {
        tracing::trace!(key, %record, "put");
        self.entries.insert(key.to_owned(), record);
    }

    fn get(&self, key: &str) -> Lookup {
        self.entries.get(key).copied().into()
    }

    fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            tracing::trace!(key, "deleted");
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("anything"), Lookup::NotFound);
    }

    #[test]
    fn put_then_get_finds_record() {
        let mut store = InMemoryStore::new();
        store.put("default", Record::new(5, 8));
        assert_eq!(store.get("default").into_pair(), (Record::new(5, 8), true));
    }

    #[test]
    fn put_overwrites() {
        let mut store = InMemoryStore::new();
        store.put("k", Record::new(1, 2));
        store.put("k", Record::new(3, 4));
        assert_eq!(store.get("k"), Lookup::Found(Record::new(3, 4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_and_is_idempotent() {
        let mut store = InMemoryStore::new();
        store.put("k", Record::new(1, 2));
        store.delete("k");
        assert_eq!(store.get("k").into_pair(), (Record::ZERO, false));
        store.delete("k");
        assert!(store.is_empty());
    }

    #[test]
    fn delete_absent_key_leaves_others() {
        let mut store = InMemoryStore::new();
        store.put("a", Record::new(1, 1));
        store.put("b", Record::new(2, 2));
        let before = store.clone();

        store.delete("missing");

        assert_eq!(store, before);
    }

    #[test]
    fn zero_record_is_distinct_from_absence() {
        let mut store = InMemoryStore::new();
        store.put("zero", Record::ZERO);
        assert!(store.get("zero").is_found());
        assert!(!store.get("other").is_found());
    }

    #[test]
    fn empty_key_is_an_ordinary_key() {
        let mut store = InMemoryStore::new();
        store.put("", Record::new(9, 9));
        assert_eq!(store.get(""), Lookup::Found(Record::new(9, 9)));
    }

    #[test]
    fn keys_are_sorted_and_clear_empties() {
        let mut store: InMemoryStore = [
            ("b".to_string(), Record::new(2, 0)),
            ("a".to_string(), Record::new(1, 0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.keys(), ["a", "b"]);
        assert_eq!(store.iter().count(), 2);

        store.clear();
        assert!(store.is_empty());
    }
}
