//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relay_core::webhook::WebhookError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown to the client whenever the webhook call fails.
pub const UPSTREAM_FAILURE: &str = "Failed to process the request to the webhook.";

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] WebhookError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, ErrorResponse::new(m.as_str())),
            AppError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(UPSTREAM_FAILURE).with_detail(e.detail()),
            ),
        };
        (status, Json(body)).into_response()
    }
}
