//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quiz_core::{SessionError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid settings: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid session: {0}")]
    Session(#[from] SessionError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, reason) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, "validation_error", Some(e.reason())),
            ApiError::Session(SessionError::EmptyDeck { .. }) => {
                (StatusCode::BAD_REQUEST, "empty_deck", None)
            }
            ApiError::Session(SessionError::NotFinished { .. }) => {
                (StatusCode::BAD_REQUEST, "quiz_not_finished", None)
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request", None),
        };

        tracing::debug!(error = %self, "request rejected");

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            reason: reason.map(str::to_string),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
