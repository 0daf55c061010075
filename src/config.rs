//! Configuration Module
//!
//! Handles loading server and memoizer configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECONDS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Age in seconds after which a memoized result is recomputed
    pub ttl_seconds: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Delay in milliseconds the simulated weather provider waits per lookup
    pub simulated_latency_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_SECONDS` - Memoized result lifetime in seconds (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SIMULATED_LATENCY_MS` - Provider delay in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: parse_env("TTL_SECONDS").unwrap_or(defaults.ttl_seconds),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            simulated_latency_ms: parse_env("SIMULATED_LATENCY_MS")
                .unwrap_or(defaults.simulated_latency_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            server_port: 3000,
            simulated_latency_ms: 1000,
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
