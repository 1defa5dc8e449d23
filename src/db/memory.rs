// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (lookup by id or email, signup append, full scan)
//! - Rewards (full scan; fixed at construction)
//!
//! Nothing is persisted; state resets on restart.

use crate::db::seed;
use crate::error::AppError;
use crate::models::{Reward, User};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    rewards: Vec<Reward>,
}

/// Shared in-memory database handle.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryDb {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDb {
    /// Create an empty store (no users, no rewards).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store holding the given records, in order.
    pub fn with_records(users: Vec<User>, rewards: Vec<Reward>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables { users, rewards })),
        }
    }

    /// Create a store with the demo fundraisers and the reward tiers.
    pub fn seeded() -> Self {
        Self::with_records(seed::demo_users(), seed::reward_tiers())
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by id.
    pub async fn get_user(&self, user_id: u32) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }

    /// Find a user by exact email match.
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Snapshot of all users in insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.tables.read().await.users.clone()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Append a newcomer record.
    ///
    /// The email check and the append happen under one write lock, so two
    /// concurrent signups with the same email cannot both succeed.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        join_date: NaiveDate,
    ) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::UserExists);
        }

        let id = u32::try_from(tables.users.len() + 1)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("User id space exhausted")))?;
        let user = User::newcomer(id, name, email, join_date);
        tables.users.push(user.clone());

        tracing::debug!(user_id = id, "User appended to store");
        Ok(user)
    }

    // ─── Reward Operations ───────────────────────────────────────

    /// All reward tiers in definition order.
    pub async fn list_rewards(&self) -> Vec<Reward> {
        self.tables.read().await.rewards.clone()
    }
}
