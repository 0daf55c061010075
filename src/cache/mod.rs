//! Cache Module
//!
//! Provides the expiring memoizer together with its store, clock and statistics.

mod clock;
mod entry;
mod memoizer;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memoizer::Memoizer;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum age of a memoized result, in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 10;
