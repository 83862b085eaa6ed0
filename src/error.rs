// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::models::Feed;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bearer token could not be obtained.
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    /// Feed request failed or returned malformed data.
    #[error("{feed} feed fetch failed: {message}")]
    FetchFailure { feed: Feed, message: String },

    /// Render attempted into a torn-down view, or a second render.
    #[error("Render refused: {0}")]
    RenderGuardViolation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Shorthand for a [`AppError::FetchFailure`].
    pub fn fetch(feed: Feed, message: impl Into<String>) -> Self {
        AppError::FetchFailure {
            feed,
            message: message.into(),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::AuthFailure(msg) => {
                (StatusCode::UNAUTHORIZED, "auth_failure", Some(msg.clone()))
            }
            AppError::FetchFailure { .. } => (
                StatusCode::BAD_GATEWAY,
                "fetch_failure",
                Some(self.to_string()),
            ),
            AppError::RenderGuardViolation(msg) => {
                (StatusCode::CONFLICT, "render_guard", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
