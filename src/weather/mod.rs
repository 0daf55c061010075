//! Weather Module
//!
//! Simulated weather source used as the memoized computation.

mod provider;

pub use provider::{ProviderError, SimulatedWeather, WeatherReport, MAX_CITY_LENGTH};
