//! TTL Memo - An expiring memoizer
//!
//! Wraps a single-argument computation and serves its results from an owned
//! store while they are younger than a fixed TTL. Ships with a simulated
//! weather provider and an HTTP service that exposes the memoized lookup.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod weather;

pub use api::AppState;
pub use cache::{Clock, ManualClock, Memoizer, SystemClock};
pub use config::Config;
