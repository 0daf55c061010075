//! Response DTOs for the weather service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::weather::WeatherReport;

/// Response body for GET /weather/:city
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    /// The requested city
    pub city: String,
    /// Temperature in degrees Celsius
    pub temperature: i32,
    /// Relative humidity in percent
    pub humidity: u8,
}

impl WeatherResponse {
    /// Creates a new WeatherResponse from a provider reading
    pub fn new(city: impl Into<String>, report: WeatherReport) -> Self {
        Self {
            city: city.into(),
            temperature: report.temperature,
            humidity: report.humidity,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups that went to the provider
    pub misses: u64,
    /// Provider lookups that failed
    pub failures: u64,
    /// Current number of entries, stale ones included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured TTL in seconds
    pub ttl_seconds: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from memoizer statistics
    pub fn new(stats: &CacheStats, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            failures: stats.failures,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_seconds,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached entries", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_response_serialize() {
        let report = WeatherReport {
            temperature: 21,
            humidity: 40,
        };
        let resp = WeatherResponse::new("paris", report);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["city"], "paris");
        assert_eq!(json["temperature"], 21);
        assert_eq!(json["humidity"], 40);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            failures: 2,
            total_entries: 15,
        };
        let resp = StatsResponse::new(&stats, 10);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.ttl_seconds, 10);
        assert_eq!(resp.failures, 2);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(&CacheStats::new(), 10);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_clear_response_serialize() {
        let json = serde_json::to_string(&ClearResponse::new(3)).unwrap();
        assert!(json.contains("\"cleared\":3"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
