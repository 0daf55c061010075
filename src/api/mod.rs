//! API Module
//!
//! HTTP handlers and routing for the weather service.
//!
//! # Endpoints
//! - `GET /weather/:city` - Memoized weather reading for a city
//! - `GET /stats` - Memoizer statistics
//! - `DELETE /cache` - Drop all memoized readings
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
