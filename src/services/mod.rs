// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - ranking and reward rules.

pub mod ranking;
pub mod rewards;

pub use ranking::rank_by_donations;
pub use rewards::{annotate_rewards, next_reward, progress_percent, summarize_progress};
