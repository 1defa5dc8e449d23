// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fundraiser (user) model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Campaign suffix appended to every referral code.
pub const REFERRAL_CAMPAIGN_SUFFIX: &str = "2025";

/// Display label for a fundraiser's tier.
///
/// Assigned when the record is created and never recalculated from
/// `donations_raised`, so it can drift from the actual total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Level {
    #[serde(rename = "Gold Fundraiser")]
    Gold,
    #[serde(rename = "Silver Fundraiser")]
    Silver,
    #[serde(rename = "Bronze Fundraiser")]
    Bronze,
    #[serde(rename = "New Intern")]
    NewIntern,
}

/// A fundraiser as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    pub id: u32,
    pub name: String,
    /// Unique across the store (exact match)
    pub email: String,
    pub referral_code: String,
    /// Total donations attributed to this user
    pub donations_raised: f64,
    /// Rank recorded at creation time.
    ///
    /// Not kept in sync with the leaderboard, which always re-sorts by
    /// `donations_raised`. It is unclear whether this field was meant to be
    /// authoritative, so both representations are kept.
    pub rank: u32,
    /// Serialized as `YYYY-MM-DD`
    pub join_date: NaiveDate,
    pub level: Level,
}

impl User {
    /// Build the record for a freshly signed-up fundraiser.
    ///
    /// `id` and `rank` are both the store size after insertion.
    pub fn newcomer(id: u32, name: &str, email: &str, join_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            referral_code: referral_code_for(name),
            donations_raised: 0.0,
            rank: id,
            join_date,
            level: Level::NewIntern,
        }
    }
}

/// Derive a referral code from a display name: lowercase, whitespace
/// stripped, campaign suffix appended.
pub fn referral_code_for(name: &str) -> String {
    let mut code: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    code.push_str(REFERRAL_CAMPAIGN_SUFFIX);
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referral_code_strips_whitespace_and_lowercases() {
        assert_eq!(referral_code_for("Alex Johnson"), "alexjohnson2025");
        assert_eq!(referral_code_for("  Mary\tAnn  Lee "), "maryannlee2025");
        assert_eq!(referral_code_for("ÉMILE"), "émile2025");
    }

    #[test]
    fn test_newcomer_defaults() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let user = User::newcomer(6, "Jo Park", "jo@example.com", date);

        assert_eq!(user.id, 6);
        assert_eq!(user.rank, 6);
        assert_eq!(user.donations_raised, 0.0);
        assert_eq!(user.level, Level::NewIntern);
        assert_eq!(user.referral_code, "jopark2025");
    }

    #[test]
    fn test_user_json_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let user = User {
            id: 1,
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            referral_code: "alex2025".to_string(),
            donations_raised: 2450.75,
            rank: 2,
            join_date: date,
            level: Level::Silver,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["referralCode"], "alex2025");
        assert_eq!(json["donationsRaised"], 2450.75);
        assert_eq!(json["joinDate"], "2024-01-15");
        assert_eq!(json["level"], "Silver Fundraiser");
        assert_eq!(json["rank"], 2);
    }
}
