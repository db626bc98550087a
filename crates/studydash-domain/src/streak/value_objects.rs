use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{LoginId, UserId};
use crate::streak::aggregate::LoginStreak;
use crate::streak::day;

/// One recorded login event. Append-only: rows are written once per user
/// per calendar day and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogin {
    id: LoginId,
    user_id: UserId,
    login_at: DateTime<Utc>,
}

impl DailyLogin {
    pub fn new(user_id: UserId, login_at: DateTime<Utc>) -> Self {
        Self {
            id: LoginId::new(),
            user_id,
            login_at,
        }
    }

    /// Restore login event from persistence
    pub fn restore(id: LoginId, user_id: UserId, login_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            login_at,
        }
    }

    /// The UTC calendar day this login falls on
    pub fn day(&self) -> NaiveDate {
        day::day_of(self.login_at)
    }

    pub fn id(&self) -> &LoginId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn login_at(&self) -> DateTime<Utc> {
        self.login_at
    }
}

/// Outcome of `StreakStore::record_login`.
///
/// `newly_recorded` distinguishes a freshly written login from the
/// idempotent no-op when the user already logged in today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedLogin {
    pub streak: LoginStreak,
    pub newly_recorded: bool,
}
