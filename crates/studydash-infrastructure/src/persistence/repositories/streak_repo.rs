use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use studydash_domain::shared::{DomainError, LoginId, UserId};
use studydash_domain::streak::{
    day_of, DailyLogin, LoginStreak, RecordedLogin, StreakEvaluator, StreakStore,
};

#[derive(FromRow)]
struct StreakRow {
    user_id: String,
    current_streak: u32,
    longest_streak: u32,
    last_login_at: DateTime<Utc>,
}

impl StreakRow {
    fn into_streak(self) -> LoginStreak {
        LoginStreak::restore(
            UserId::from_string(&self.user_id),
            self.current_streak,
            self.longest_streak,
            self.last_login_at,
        )
    }
}

#[derive(FromRow)]
struct DailyLoginRow {
    id: String,
    user_id: String,
    login_at: DateTime<Utc>,
}

impl DailyLoginRow {
    fn into_login(self) -> DailyLogin {
        DailyLogin::restore(
            LoginId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.login_at,
        )
    }
}

pub struct SqliteStreakStore {
    base: SqliteRepositoryBase,
}

impl SqliteStreakStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    fn day_key(day: NaiveDate) -> String {
        day.format("%Y-%m-%d").to_string()
    }

    async fn load_streak(
        conn: &mut SqliteConnection,
        user_id: &UserId,
    ) -> Result<Option<LoginStreak>, DomainError> {
        let query = r#"
            SELECT user_id, current_streak, longest_streak, last_login_at
            FROM login_streaks
            WHERE user_id = ?1
        "#;

        let row: Option<StreakRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_optional(conn)
            .await
            .to_repo_err()?;

        Ok(row.map(|r| r.into_streak()))
    }

    async fn upsert_streak(
        conn: &mut SqliteConnection,
        streak: &LoginStreak,
    ) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO login_streaks (user_id, current_streak, longest_streak, last_login_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                current_streak = ?2,
                longest_streak = ?3,
                last_login_at = ?4
        "#;

        sqlx::query(query)
            .bind(streak.user_id().as_str())
            .bind(streak.current_streak())
            .bind(streak.longest_streak())
            .bind(streak.last_login_at())
            .execute(conn)
            .await
            .to_repo_err()?;

        Ok(())
    }

    /// Streak to hand back when today's login row exists. A missing
    /// streak record here means an earlier write crashed between the
    /// login insert and the streak upsert; re-seed it from today's login
    /// so the inconsistency heals instead of surfacing all day.
    async fn existing_streak_for_today(
        conn: &mut SqliteConnection,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<LoginStreak, DomainError> {
        if let Some(streak) = Self::load_streak(conn, user_id).await? {
            return Ok(streak);
        }

        warn!(
            "[streak] login row exists without streak record, re-seeding user_id={}",
            user_id
        );
        let repaired = LoginStreak::started(user_id.clone(), now);
        Self::upsert_streak(conn, &repaired).await?;
        Ok(repaired)
    }
}

#[async_trait]
impl StreakStore for SqliteStreakStore {
    async fn has_logged_today(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) FROM daily_logins WHERE user_id = ?1 AND login_day = ?2";

        let count: i64 = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .bind(Self::day_key(today))
            .fetch_one(self.base.pool())
            .await
            .with_repo_context("Check login for today")?;

        Ok(count > 0)
    }

    async fn record_login(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<RecordedLogin, DomainError> {
        let today = day_of(now);
        let today_key = Self::day_key(today);

        // Check + insert + evaluate + upsert in one transaction. The
        // unique (user_id, login_day) index backs this up: whichever
        // concurrent writer loses degrades to the no-op path below.
        let mut tx = self.base.pool().begin().await.to_repo_err()?;

        let already: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM daily_logins WHERE user_id = ?1 AND login_day = ?2")
                .bind(user_id.as_str())
                .bind(&today_key)
                .fetch_optional(&mut *tx)
                .await
                .to_repo_err()?;

        if already.is_some() {
            let streak = Self::existing_streak_for_today(&mut tx, user_id, now).await?;
            tx.commit().await.to_repo_err()?;
            return Ok(RecordedLogin {
                streak,
                newly_recorded: false,
            });
        }

        // Most recent login day strictly before today, for gap math.
        let last_day_key: Option<String> = sqlx::query_scalar(
            "SELECT MAX(login_day) FROM daily_logins WHERE user_id = ?1 AND login_day < ?2",
        )
        .bind(user_id.as_str())
        .bind(&today_key)
        .fetch_one(&mut *tx)
        .await
        .to_repo_err()?;

        let last_login_day = last_day_key
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                    DomainError::DataIntegrity(format!("Invalid login_day {:?}: {}", raw, e))
                })
            })
            .transpose()?;

        let login = DailyLogin::new(user_id.clone(), now);
        let inserted = sqlx::query(
            r#"
            INSERT INTO daily_logins (id, user_id, login_at, login_day)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id, login_day) DO NOTHING
            "#,
        )
        .bind(login.id().as_str())
        .bind(user_id.as_str())
        .bind(login.login_at())
        .bind(&today_key)
        .execute(&mut *tx)
        .await
        .to_repo_err()?;

        if inserted.rows_affected() == 0 {
            // Lost the race to a concurrent writer for the same day.
            let streak = Self::existing_streak_for_today(&mut tx, user_id, now).await?;
            tx.commit().await.to_repo_err()?;
            return Ok(RecordedLogin {
                streak,
                newly_recorded: false,
            });
        }

        let previous = Self::load_streak(&mut tx, user_id).await?;
        let next = StreakEvaluator::evaluate(user_id, previous.as_ref(), last_login_day, now);
        Self::upsert_streak(&mut tx, &next).await?;

        tx.commit().await.to_repo_err()?;

        Ok(RecordedLogin {
            streak: next,
            newly_recorded: true,
        })
    }

    async fn find_streak(&self, user_id: &UserId) -> Result<Option<LoginStreak>, DomainError> {
        let query = r#"
            SELECT user_id, current_streak, longest_streak, last_login_at
            FROM login_streaks
            WHERE user_id = ?1
        "#;

        let row: Option<StreakRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find login streak")?;

        Ok(row.map(|r| r.into_streak()))
    }

    async fn recent_logins(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<DailyLogin>, DomainError> {
        // Collapse to one row per calendar day BEFORE limiting, so a
        // burst of same-day rows (pre-constraint data) cannot crowd out
        // older days.
        let query = r#"
            SELECT id, user_id, MAX(login_at) AS login_at
            FROM daily_logins
            WHERE user_id = ?1
            GROUP BY login_day
            ORDER BY login_day DESC
            LIMIT ?2
        "#;

        let rows: Vec<DailyLoginRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .bind(limit)
            .fetch_all(self.base.pool())
            .await
            .with_repo_context("List recent logins")?;

        Ok(rows.into_iter().map(|r| r.into_login()).collect())
    }
}
