// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard ordering.

use crate::models::User;

/// Order users by donations raised, highest first.
///
/// The sort is stable: users with exactly equal totals keep their input
/// (store insertion) order. The stored `rank` field is neither read nor
/// rewritten here.
pub fn rank_by_donations(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| b.donations_raised.total_cmp(&a.donations_raised));
    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::demo_users;
    use crate::models::Level;
    use chrono::NaiveDate;

    fn user(id: u32, donations: f64) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            referral_code: format!("user{}2025", id),
            donations_raised: donations,
            rank: 0,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            level: Level::Bronze,
        }
    }

    #[test]
    fn test_seeded_order() {
        let ids: Vec<u32> = rank_by_donations(demo_users())
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let users = vec![user(1, 50.0), user(2, 75.0), user(3, 50.0), user(4, 50.0)];
        let ids: Vec<u32> = rank_by_donations(users).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_non_increasing_donations() {
        let users = vec![
            user(1, 0.0),
            user(2, 1420.8),
            user(3, 99.99),
            user(4, 5000.0),
            user(5, 0.0),
        ];
        let ranked = rank_by_donations(users);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].donations_raised >= w[1].donations_raised));
    }

    #[test]
    fn test_stored_rank_untouched() {
        let ranked = rank_by_donations(demo_users());
        let alex = ranked.iter().find(|u| u.id == 1).unwrap();
        assert_eq!(alex.rank, 2);
    }

    #[test]
    fn test_empty() {
        assert!(rank_by_donations(Vec::new()).is_empty());
    }
}
