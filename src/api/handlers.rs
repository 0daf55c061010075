//! API Handlers
//!
//! HTTP request handlers for each weather service endpoint.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{Clock, Memoizer, SystemClock};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{ClearResponse, HealthResponse, StatsResponse, WeatherResponse};
use crate::weather::{ProviderError, SimulatedWeather, WeatherReport};

/// Memoized computation: city name to weather reading.
pub type WeatherCompute =
    Box<dyn FnMut(&String) -> std::result::Result<WeatherReport, ProviderError> + Send>;

/// Clock shared between the memoizer and whoever drives it.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// The memoizer behind the weather endpoint.
pub type WeatherMemoizer = Memoizer<String, WeatherReport, WeatherCompute, SharedClock>;

/// Application state shared across all handlers.
///
/// The memoizer itself holds no lock, so it sits behind a mutex here. A
/// lookup keeps the lock while the provider runs, so concurrent requests
/// for an uncached city compute it once.
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<Mutex<WeatherMemoizer>>,
}

impl AppState {
    /// Creates a new AppState around an existing memoizer.
    pub fn new(memoizer: WeatherMemoizer) -> Self {
        Self {
            weather: Arc::new(Mutex::new(memoizer)),
        }
    }

    /// Creates a new AppState from configuration, using the wall clock.
    pub fn from_config(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new AppState from configuration with an explicit clock.
    pub fn with_clock(config: &Config, clock: SharedClock) -> Self {
        let mut provider =
            SimulatedWeather::new(Duration::from_millis(config.simulated_latency_ms));
        let compute: WeatherCompute = Box::new(move |city: &String| provider.fetch(city));
        let memoizer = Memoizer::with_clock(compute, clock)
            .with_ttl(Duration::from_secs(config.ttl_seconds));
        Self::new(memoizer)
    }
}

/// Handler for GET /weather/:city
///
/// Returns the memoized reading for `city`, asking the provider only when
/// no fresh one exists. The provider blocks, so the lookup runs on the
/// blocking thread pool.
pub async fn weather_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>> {
    let weather = Arc::clone(&state.weather);
    let key = city.clone();

    let report = tokio::task::spawn_blocking(move || weather.blocking_lock().fetch(key))
        .await
        .map_err(|e| ServiceError::Internal(format!("Weather lookup task failed: {}", e)))??;

    Ok(Json(WeatherResponse::new(city, report)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let weather = state.weather.lock().await;
    Json(StatsResponse::new(&weather.stats(), weather.ttl().as_secs()))
}

/// Handler for DELETE /cache
///
/// Drops every memoized reading; counters are kept.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.weather.lock().await.clear();
    tracing::info!("Cleared {} cached weather entries", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
