// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Startup records: demo fundraisers and the reward ladder.

use crate::models::{Level, Reward, User};
use chrono::NaiveDate;

struct DemoUser {
    id: u32,
    name: &'static str,
    email: &'static str,
    referral_code: &'static str,
    donations_raised: f64,
    rank: u32,
    join_date: (i32, u32, u32),
    level: Level,
}

const DEMO_USERS: [DemoUser; 5] = [
    DemoUser {
        id: 1,
        name: "Alex Johnson",
        email: "alex@example.com",
        referral_code: "alex2025",
        donations_raised: 2450.75,
        rank: 2,
        join_date: (2024, 1, 15),
        level: Level::Silver,
    },
    DemoUser {
        id: 2,
        name: "Sarah Chen",
        email: "sarah@example.com",
        referral_code: "sarah2025",
        donations_raised: 3200.50,
        rank: 1,
        join_date: (2024, 1, 10),
        level: Level::Gold,
    },
    DemoUser {
        id: 3,
        name: "Mike Rodriguez",
        email: "mike@example.com",
        referral_code: "mike2025",
        donations_raised: 1875.25,
        rank: 3,
        join_date: (2024, 1, 20),
        level: Level::Bronze,
    },
    DemoUser {
        id: 4,
        name: "Emma Thompson",
        email: "emma@example.com",
        referral_code: "emma2025",
        donations_raised: 1650.00,
        rank: 4,
        join_date: (2024, 1, 25),
        level: Level::Bronze,
    },
    DemoUser {
        id: 5,
        name: "David Kim",
        email: "david@example.com",
        referral_code: "david2025",
        donations_raised: 1420.80,
        rank: 5,
        join_date: (2024, 2, 1),
        level: Level::Bronze,
    },
];

/// (title, description, threshold, icon)
const REWARD_TIERS: [(&str, &str, f64, &str); 5] = [
    (
        "Welcome Badge",
        "Complete your first donation referral",
        100.0,
        "🎖️",
    ),
    ("Rising Star", "Raise $500 in donations", 500.0, "⭐"),
    (
        "Community Champion",
        "Raise $1000 in donations",
        1000.0,
        "🏆",
    ),
    ("Fundraising Hero", "Raise $2500 in donations", 2500.0, "🦸"),
    ("Impact Legend", "Raise $5000 in donations", 5000.0, "👑"),
];

/// Demo fundraisers shown on a fresh server.
///
/// Stored ranks are hand-assigned and only happen to match the leaderboard.
pub fn demo_users() -> Vec<User> {
    DEMO_USERS
        .iter()
        .filter_map(|d| {
            let (y, m, day) = d.join_date;
            let join_date = NaiveDate::from_ymd_opt(y, m, day)?;
            Some(User {
                id: d.id,
                name: d.name.to_string(),
                email: d.email.to_string(),
                referral_code: d.referral_code.to_string(),
                donations_raised: d.donations_raised,
                rank: d.rank,
                join_date,
                level: d.level,
            })
        })
        .collect()
}

/// Reward ladder, ids assigned in order starting at 1.
pub fn reward_tiers() -> Vec<Reward> {
    REWARD_TIERS
        .iter()
        .zip(1..)
        .map(|(&(title, description, threshold, icon), id)| Reward {
            id,
            title: title.to_string(),
            description: description.to_string(),
            threshold,
            icon: icon.to_string(),
        })
        .collect()
}
