use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::{DomainError, UserId};
use crate::streak::{DailyLogin, LoginStreak, RecordedLogin};

/// Persistence contract for streaks and the append-only login log.
///
/// All operations are scoped to a single user.
#[async_trait]
pub trait StreakStore: Send + Sync {
    /// Whether a login row already exists for `today`
    async fn has_logged_today(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<bool, DomainError>;

    /// Record a login for the day `now` falls on.
    ///
    /// Idempotent per calendar day: a second call on the same day
    /// returns the stored streak unchanged and writes nothing.
    /// Implementations must run the check + login insert + streak
    /// upsert as one atomic transaction so that concurrent calls for
    /// the same user cannot double-count a day.
    async fn record_login(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<RecordedLogin, DomainError>;

    /// The stored streak record, if the user has ever logged in
    async fn find_streak(&self, user_id: &UserId) -> Result<Option<LoginStreak>, DomainError>;

    /// Most recent logins, newest first, at most one entry per calendar
    /// day. Deduplication happens before `limit` is applied.
    async fn recent_logins(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<DailyLogin>, DomainError>;
}
