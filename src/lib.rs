// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fundraiser Tracker: referral fundraising leaderboard and rewards
//!
//! This crate provides the backend API for the fundraising dashboard:
//! fundraiser profiles, the donations leaderboard, reward unlocks, and a
//! minimal login/signup flow over an in-memory record store.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::MemoryDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
}

impl AppState {
    /// Build state with a store chosen by `config.seed_demo_data`.
    pub fn from_config(config: Config) -> Self {
        let db = if config.seed_demo_data {
            MemoryDb::seeded()
        } else {
            MemoryDb::with_records(Vec::new(), crate::db::seed::reward_tiers())
        };
        Self { config, db }
    }
}
