//! Error types for the weather service
//!
//! The memoizer has no error type of its own; lookup failures come straight
//! from the weather provider and are mapped to HTTP responses here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::weather::ProviderError;

// == Service Error Enum ==
/// Unified error type for the weather service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The weather lookup itself failed
    #[error("Weather lookup failed: {0}")]
    Lookup(#[from] ProviderError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Lookup(ProviderError::InvalidCity(_)) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather service.
pub type Result<T> = std::result::Result<T, ServiceError>;
