//! Error types for the prayer-time service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Prayer Error Enum ==
/// Unified error type for the prayer-time service.
///
/// Every variant is an input-validation failure; nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrayerError {
    /// Date input could not be normalized to a calendar day
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Shamsi date string did not decompose into a real Shamsi day
    #[error("Invalid Shamsi date: {0}")]
    InvalidShamsiDate(String),

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PrayerError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            PrayerError::InvalidDate(_) => "invalid_date",
            PrayerError::InvalidShamsiDate(_) => "invalid_shamsi_date",
            PrayerError::InvalidRequest(_) => "invalid_request",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PrayerError {
    fn into_response(self) -> Response {
        let status = match &self {
            PrayerError::InvalidDate(_)
            | PrayerError::InvalidShamsiDate(_)
            | PrayerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.code(), self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prayer-time service.
pub type Result<T> = std::result::Result<T, PrayerError>;
