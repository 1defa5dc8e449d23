// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod reward;
pub mod user;

pub use reward::{Reward, RewardProgress, RewardStatus};
pub use user::{Level, User};
