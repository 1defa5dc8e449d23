// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Lookup failures answer with `{"error": ...}`; the login/signup endpoints
/// answer with `{"success": false, "message": ...}`, which is what the
/// frontend reads.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message used for unknown user ids.
    pub const USER_NOT_FOUND: &'static str = "User not found";

    pub fn user_not_found() -> Self {
        AppError::NotFound(Self::USER_NOT_FOUND.to_string())
    }
}

/// JSON body for lookup errors
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// JSON body for auth endpoint failures
#[derive(Serialize)]
struct FailureResponse {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::InvalidCredentials => failure(StatusCode::UNAUTHORIZED, message),
            AppError::UserExists | AppError::BadRequest(_) => {
                failure(StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                let body = ErrorResponse {
                    error: "internal_error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    let body = FailureResponse {
        success: false,
        message,
    };
    (status, Json(body)).into_response()
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
