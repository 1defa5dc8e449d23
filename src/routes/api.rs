// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only API routes: profiles, leaderboard and rewards.

use crate::error::{AppError, Result};
use crate::models::{RewardProgress, RewardStatus, User};
use crate::services::{annotate_rewards, rank_by_donations, summarize_progress};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/{id}", get(get_user))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/rewards/{user_id}", get(get_rewards))
        .route("/api/rewards/{user_id}/progress", get(get_reward_progress))
}

/// Parse a path id. Anything that is not a user id is simply an unknown user.
fn parse_user_id(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| AppError::user_not_found())
}

async fn load_user(state: &AppState, raw_id: &str) -> Result<User> {
    let user_id = parse_user_id(raw_id)?;
    state.db.get_user(user_id).await.ok_or_else(|| {
        tracing::debug!(user_id, "User not found");
        AppError::user_not_found()
    })
}

// ─── User Profile ────────────────────────────────────────────

/// Get a single fundraiser.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user = load_user(&state, &id).await?;
    Ok(Json(user))
}

// ─── Leaderboard ─────────────────────────────────────────────

/// All fundraisers, highest donations first.
///
/// Order is recomputed on every call; each record's stored `rank` is
/// returned as-is and may disagree with its position.
async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let users = rank_by_donations(state.db.list_users().await);
    tracing::debug!(count = users.len(), "Serving leaderboard");
    Json(users)
}

// ─── Rewards ─────────────────────────────────────────────────

/// Every reward tier with the user's unlock state.
async fn get_rewards(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RewardStatus>>> {
    let user = load_user(&state, &user_id).await?;
    let rewards = state.db.list_rewards().await;

    Ok(Json(annotate_rewards(user.donations_raised, &rewards)))
}

/// Progress toward the next locked reward.
async fn get_reward_progress(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<RewardProgress>> {
    let user = load_user(&state, &user_id).await?;
    let rewards = state.db.list_rewards().await;

    let progress = summarize_progress(&user, &rewards);
    tracing::debug!(
        user_id = user.id,
        unlocked = progress.unlocked_count,
        progress_percent = progress.progress_percent,
        "Computed reward progress"
    );

    Ok(Json(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("5").unwrap(), 5);
        assert_eq!(parse_user_id(" 12 ").unwrap(), 12);

        for raw in ["abc", "-1", "1.5", ""] {
            let err = parse_user_id(raw).unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)), "raw: {:?}", raw);
        }
    }
}
