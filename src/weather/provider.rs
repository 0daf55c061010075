//! Simulated Weather Provider
//!
//! Stands in for a slow upstream weather service: every lookup blocks for
//! a configured latency and returns random readings.

use std::thread::sleep;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Maximum accepted city name length in bytes
pub const MAX_CITY_LENGTH: usize = 64;

// == Weather Report ==
/// A single weather reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius, between -10 and 30
    pub temperature: i32,
    /// Relative humidity in percent, between 0 and 100
    pub humidity: u8,
}

// == Provider Error ==
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// City name is empty, too long, or contains unexpected characters
    #[error("Invalid city name: {0:?}")]
    InvalidCity(String),
}

// == Simulated Weather ==
/// Weather source with artificial latency.
#[derive(Debug, Clone)]
pub struct SimulatedWeather {
    latency: Duration,
    lookups: u64,
}

impl SimulatedWeather {
    /// Creates a provider that blocks for `latency` on every lookup.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            lookups: 0,
        }
    }

    /// Number of lookups that reached the provider.
    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    // == Fetch ==
    /// Produces a fresh reading for `city`.
    ///
    /// Blocks the calling thread for the configured latency.
    pub fn fetch(&mut self, city: &str) -> Result<WeatherReport, ProviderError> {
        validate_city(city)?;

        info!("Fetching weather data for {}...", city);
        self.lookups += 1;
        if !self.latency.is_zero() {
            sleep(self.latency);
        }

        let mut rng = rand::thread_rng();
        Ok(WeatherReport {
            temperature: rng.gen_range(-10..=30),
            humidity: rng.gen_range(0..=100),
        })
    }
}

fn validate_city(city: &str) -> Result<(), ProviderError> {
    let valid = !city.trim().is_empty()
        && city.len() <= MAX_CITY_LENGTH
        && city
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'));

    if valid {
        Ok(())
    } else {
        Err(ProviderError::InvalidCity(city.to_string()))
    }
}
