// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward unlock rules.
//!
//! Each reward is judged on its own threshold; tiers do not gate each other
//! even though the dashboard presents them as a ladder.

use crate::models::{Reward, RewardProgress, RewardStatus, User};

/// Whether `donations` meets a reward's threshold.
pub fn is_unlocked(donations: f64, reward: &Reward) -> bool {
    donations >= reward.threshold
}

/// Annotate every reward with its unlock state for one user, keeping reward order.
pub fn annotate_rewards(donations: f64, rewards: &[Reward]) -> Vec<RewardStatus> {
    rewards
        .iter()
        .map(|reward| RewardStatus {
            unlocked: is_unlocked(donations, reward),
            reward: reward.clone(),
        })
        .collect()
}

/// The lowest-threshold reward that is still locked.
pub fn next_reward(donations: f64, rewards: &[Reward]) -> Option<&Reward> {
    rewards
        .iter()
        .filter(|r| !is_unlocked(donations, r))
        .min_by(|a, b| a.threshold.total_cmp(&b.threshold))
}

/// Percent progress toward `next`, clamped to 0..=100.
///
/// With nothing left to unlock the user is considered complete.
pub fn progress_percent(donations: f64, next: Option<&Reward>) -> f64 {
    match next {
        Some(reward) if reward.threshold > 0.0 => {
            (donations / reward.threshold * 100.0).clamp(0.0, 100.0)
        }
        _ => 100.0,
    }
}

/// Dashboard summary for one user.
pub fn summarize_progress(user: &User, rewards: &[Reward]) -> RewardProgress {
    let donations = user.donations_raised;
    let next = next_reward(donations, rewards);
    let unlocked_count = rewards
        .iter()
        .filter(|r| is_unlocked(donations, r))
        .count();

    RewardProgress {
        user_id: user.id,
        donations_raised: donations,
        unlocked_count: unlocked_count as u32,
        total_rewards: rewards.len() as u32,
        progress_percent: progress_percent(donations, next),
        next_reward: next.cloned(),
    }
}
