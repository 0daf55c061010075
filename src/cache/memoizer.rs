//! Memoizer Module
//!
//! Wraps a single-argument computation and serves its results from an owned
//! store while they are younger than the configured TTL.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, Clock, SystemClock, DEFAULT_TTL_SECONDS};

// == Memoizer ==
/// Expiring memoizer over `compute`.
///
/// Each key moves through `Absent -> Fresh -> Stale -> Fresh -> ...`. A
/// fresh entry is served without calling `compute`; an absent or stale one
/// is recomputed and overwritten. Nothing is ever evicted.
///
/// The memoizer takes `&mut self` and carries no lock. Callers that share it
/// across threads wrap it themselves.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use ttl_memo::{ManualClock, Memoizer};
///
/// let clock = ManualClock::new(0);
/// let mut calls = 0;
/// let mut memo = Memoizer::with_clock(
///     |city: &String| -> Result<usize, ()> {
///         calls += 1;
///         Ok(city.len())
///     },
///     clock.clone(),
/// )
/// .with_ttl(Duration::from_secs(10));
///
/// assert_eq!(memo.fetch("paris".to_string()), Ok(5));
/// assert_eq!(memo.fetch("paris".to_string()), Ok(5));
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(memo.fetch("paris".to_string()), Ok(5));
/// assert_eq!(memo.stats().misses, 2);
/// ```
pub struct Memoizer<K, V, F, C = SystemClock> {
    /// Underlying computation
    compute: F,
    /// Time source used to stamp and age entries
    clock: C,
    /// Memoized results
    store: CacheStore<K, V>,
    /// Hit/miss/failure counters
    stats: CacheStats,
    /// Maximum age of a servable entry, in milliseconds
    ttl_ms: u64,
}

impl<K: Eq + Hash, V, F> Memoizer<K, V, F, SystemClock> {
    // == Constructor ==
    /// Creates a memoizer over `compute` using the wall clock and the default TTL.
    pub fn new(compute: F) -> Self {
        Self::with_clock(compute, SystemClock)
    }
}

impl<K: Eq + Hash, V, F, C: Clock> Memoizer<K, V, F, C> {
    /// Creates a memoizer over `compute` reading time from `clock`.
    pub fn with_clock(compute: F, clock: C) -> Self {
        Self::with_store(compute, clock, CacheStore::new())
    }

    /// Creates a memoizer that starts from an existing store.
    pub fn with_store(compute: F, clock: C, store: CacheStore<K, V>) -> Self {
        let mut stats = CacheStats::new();
        stats.set_total_entries(store.len());
        Self {
            compute,
            clock,
            store,
            stats,
            ttl_ms: DEFAULT_TTL_SECONDS * 1000,
        }
    }

    /// Sets the maximum age of a servable entry.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Clear ==
    /// Drops every memoized result. Counters are kept.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.store.clear();
        self.stats.set_total_entries(0);
        debug!(removed, "Cleared memoized results");
        removed
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.len());
        stats
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CacheStore<K, V> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<K, V, F, C, E> Memoizer<K, V, F, C>
where
    K: Eq + Hash + Debug,
    V: Clone,
    F: FnMut(&K) -> Result<V, E>,
    C: Clock,
{
    // == Fetch ==
    /// Returns the result for `key`, computing it only when no fresh entry exists.
    ///
    /// On a miss the result is stamped with the clock reading taken after
    /// `compute` returns. If `compute` fails its error is returned unchanged
    /// and the store is not touched.
    pub fn fetch(&mut self, key: K) -> Result<V, E> {
        let now = self.clock.now_ms();
        if let Some(entry) = self.store.get(&key) {
            if entry.is_fresh(now, self.ttl_ms) {
                debug!(key = ?key, age_ms = entry.age_ms(now), "Returning cached result");
                self.stats.record_hit();
                return Ok(entry.value.clone());
            }
        }

        self.stats.record_miss();
        debug!(key = ?key, "Cache miss, computing");

        let value = match (self.compute)(&key) {
            Ok(value) => value,
            Err(err) => {
                self.stats.record_failure();
                warn!(key = ?key, "Computation failed, nothing cached");
                return Err(err);
            }
        };

        let produced_at = self.clock.now_ms();
        self.store.insert(key, value.clone(), produced_at);
        self.stats.set_total_entries(self.store.len());
        Ok(value)
    }
}
