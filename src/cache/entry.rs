//! Cache Entry Module
//!
//! Defines a memoized result together with the time it was produced.

// == Cache Entry ==
/// Represents a single memoized result and its production timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time the value was produced (milliseconds, as reported by the clock)
    pub produced_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with `produced_at`.
    pub fn new(value: V, produced_at: u64) -> Self {
        Self { value, produced_at }
    }

    // == Age ==
    /// Returns the age of the entry at `now`, in milliseconds.
    ///
    /// A clock reading earlier than `produced_at` yields an age of zero.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.produced_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale.
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) < ttl_ms
    }
}
