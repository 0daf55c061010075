//! Cache Store Module
//!
//! Owned key to entry map backing a memoizer. Entries are only ever
//! overwritten, never evicted, so the store grows with the number of
//! distinct keys seen.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to cache entry storage with overwrite-only semantics.
#[derive(Debug, Clone)]
pub struct CacheStore<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> Default for CacheStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> CacheStore<K, V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the entry for `key`, fresh or not.
    pub fn get(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Insert ==
    /// Stores `value` for `key`, replacing any previous entry.
    ///
    /// The stored `produced_at` never moves backwards for a key: if an older
    /// entry carries a later timestamp than `produced_at`, that timestamp is
    /// kept. Returns the timestamp actually recorded.
    pub fn insert(&mut self, key: K, value: V, produced_at: u64) -> u64 {
        let produced_at = match self.entries.get(&key) {
            Some(previous) => previous.produced_at.max(produced_at),
            None => produced_at,
        };
        self.entries.insert(key, CacheEntry::new(value, produced_at));
        produced_at
    }

    // == Clear ==
    /// Removes every entry, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Length ==
    /// Returns the current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
