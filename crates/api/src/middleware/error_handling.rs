//! # Error Handling Middleware
//!
//! Maps the domain error kinds to HTTP status codes and JSON error
//! responses so the whole API fails uniformly. The mapping lives in one
//! table here; handlers return [`HackError`] kinds and never choose
//! status codes themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hackhub_core::errors::HackError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`HackError`] instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub HackError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error kinds to HTTP status codes. Quota, window and
        // already-booked failures are all client errors on the booking
        // surface; the distinct kinds keep them told apart without
        // message matching.
        let status = match &self.0 {
            HackError::NotFound(_) => StatusCode::NOT_FOUND,
            HackError::Validation(_) => StatusCode::BAD_REQUEST,
            HackError::QuotaExceeded(_) => StatusCode::BAD_REQUEST,
            HackError::Conflict(_) => StatusCode::BAD_REQUEST,
            HackError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HackError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HackError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, HackError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<HackError> for AppError {
    fn from(err: HackError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on repository calls returning `eyre::Result` by classifying
/// them as store failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(HackError::Database(err))
    }
}

/// Maps a [`HackError`] to an HTTP response directly.
pub fn map_error(err: HackError) -> Response {
    AppError(err).into_response()
}
