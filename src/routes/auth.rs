// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and signup routes.
//!
//! SECURITY: there is no real authentication here. Login only checks that the
//! email exists (the password is accepted but never compared), and the session
//! token is a fixed placeholder. Both are kept for compatibility with the
//! existing frontend contract.

use crate::error::{AppError, Result};
use crate::extract::ValidatedJson;
use crate::models::User;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Token handed out on every successful login or signup.
pub const PLACEHOLDER_SESSION_TOKEN: &str = "dummy-jwt-token";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Required on the wire, never checked.
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(max = 100, message = "name must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Required on the wire; nothing is stored.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be blank".into()));
    }
    Ok(())
}

/// Successful login/signup response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub success: bool,
    pub user: User,
    pub token: String,
}

impl AuthResponse {
    fn for_user(user: User) -> Self {
        Self {
            success: true,
            user,
            token: PLACEHOLDER_SESSION_TOKEN.to_string(),
        }
    }
}

/// Log in by email.
async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let Some(user) = state.db.find_user_by_email(&body.email).await else {
        tracing::info!("Login rejected: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(AuthResponse::for_user(user)))
}

/// Register a new fundraiser.
async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    let join_date = chrono::Utc::now().date_naive();

    let user = state
        .db
        .create_user(&body.name, &body.email, join_date)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::UserExists) {
                tracing::info!("Signup rejected: email already registered");
            }
        })?;

    tracing::info!(
        user_id = user.id,
        referral_code = %user.referral_code,
        "User signed up"
    );

    Ok(Json(AuthResponse::for_user(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup_request("Jo Park", "jo@example.com", "pw")
            .validate()
            .is_ok());
        assert!(signup_request("   ", "jo@example.com", "pw")
            .validate()
            .is_err());
        assert!(signup_request(&"x".repeat(101), "jo@example.com", "pw")
            .validate()
            .is_err());
        assert!(signup_request("Jo Park", "not-an-email", "pw")
            .validate()
            .is_err());
        assert!(signup_request("Jo Park", "jo@example.com", "")
            .validate()
            .is_err());
    }

    #[test]
    fn test_login_validation_ignores_password() {
        let req = LoginRequest {
            email: "nobody@x.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_ok());

        let req = LoginRequest {
            email: String::new(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
