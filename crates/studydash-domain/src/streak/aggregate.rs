use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;
use crate::streak::day;

/// Login streak aggregate, one per user.
///
/// Invariant: `longest_streak >= current_streak` at all times. A streak
/// that breaks restarts at 1, never 0 — the login that ends the gap is
/// itself day one of the new streak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginStreak {
    user_id: UserId,
    current_streak: u32,
    longest_streak: u32,
    last_login_at: DateTime<Utc>,
}

impl LoginStreak {
    /// First-ever login for a user
    pub fn started(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            current_streak: 1,
            longest_streak: 1,
            last_login_at: now,
        }
    }

    /// Restore streak from persistence
    pub fn restore(
        user_id: UserId,
        current_streak: u32,
        longest_streak: u32,
        last_login_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            current_streak,
            longest_streak,
            last_login_at,
        }
    }

    /// Successor streak after a consecutive-day login
    pub fn extended(&self, now: DateTime<Utc>) -> Self {
        let current = self.current_streak + 1;
        Self {
            user_id: self.user_id.clone(),
            current_streak: current,
            longest_streak: self.longest_streak.max(current),
            last_login_at: now,
        }
    }

    /// Successor streak after a gap of two or more days.
    ///
    /// `longest_streak` survives the reset.
    pub fn restarted(&self, now: DateTime<Utc>) -> Self {
        Self {
            user_id: self.user_id.clone(),
            current_streak: 1,
            longest_streak: self.longest_streak,
            last_login_at: now,
        }
    }

    /// The calendar day of the most recent recorded login
    pub fn last_login_day(&self) -> NaiveDate {
        day::day_of(self.last_login_at)
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_login_at(&self) -> DateTime<Utc> {
        self.last_login_at
    }
}
