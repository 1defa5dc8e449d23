// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward tiers and per-user reward views.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A reward tier, fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reward {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Donations needed to unlock (always positive)
    pub threshold: f64,
    /// Display glyph
    pub icon: String,
}

/// A reward as seen by one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardStatus {
    #[serde(flatten)]
    pub reward: Reward,
    pub unlocked: bool,
}

/// Dashboard view of a user's progress toward the next reward.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardProgress {
    pub user_id: u32,
    pub donations_raised: f64,
    pub unlocked_count: u32,
    pub total_rewards: u32,
    /// Lowest-threshold reward still locked, if any
    pub next_reward: Option<Reward>,
    /// Percent of the way to `next_reward`, capped at 100
    pub progress_percent: f64,
}
