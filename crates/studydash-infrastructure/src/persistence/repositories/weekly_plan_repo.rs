use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use studydash_domain::planner::{WeeklyPlan, WeeklyPlanRepository};
use studydash_domain::shared::{DomainError, PlanId, UserId};

#[derive(FromRow)]
struct WeeklyPlanRow {
    id: String,
    user_id: String,
    start_date: String,
    end_date: String,
    goals: String,
    subjects: String,
    created_at: DateTime<Utc>,
}

impl WeeklyPlanRow {
    fn try_into_plan(self) -> Result<WeeklyPlan, DomainError> {
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;

        let goals: Vec<String> = serde_json::from_str(&self.goals)
            .map_err(|e| DomainError::Serialization(format!("Invalid plan goals: {}", e)))?;
        let subjects: Vec<String> = serde_json::from_str(&self.subjects)
            .map_err(|e| DomainError::Serialization(format!("Invalid plan subjects: {}", e)))?;

        Ok(WeeklyPlan::restore(
            PlanId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            start_date,
            end_date,
            goals,
            subjects,
            self.created_at,
        ))
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid plan date {:?}: {}", raw, e)))
}

pub struct SqliteWeeklyPlanRepository {
    base: SqliteRepositoryBase,
}

impl SqliteWeeklyPlanRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl WeeklyPlanRepository for SqliteWeeklyPlanRepository {
    async fn save(&self, plan: &WeeklyPlan) -> Result<(), DomainError> {
        let goals = serde_json::to_string(plan.goals())
            .map_err(|e| DomainError::Serialization(format!("Serialize plan goals: {}", e)))?;
        let subjects = serde_json::to_string(plan.subjects())
            .map_err(|e| DomainError::Serialization(format!("Serialize plan subjects: {}", e)))?;

        let query = r#"
            INSERT INTO weekly_plans (id, user_id, start_date, end_date, goals, subjects, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                start_date = ?3,
                end_date = ?4,
                goals = ?5,
                subjects = ?6
        "#;

        sqlx::query(query)
            .bind(plan.id().as_str())
            .bind(plan.user_id().as_str())
            .bind(plan.start_date().format("%Y-%m-%d").to_string())
            .bind(plan.end_date().format("%Y-%m-%d").to_string())
            .bind(goals)
            .bind(subjects)
            .bind(plan.created_at())
            .execute(self.base.pool())
            .await
            .with_repo_context("Save weekly plan")?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<WeeklyPlan>, DomainError> {
        let query = r#"
            SELECT id, user_id, start_date, end_date, goals, subjects, created_at
            FROM weekly_plans
            WHERE id = ?1
        "#;

        let row: Option<WeeklyPlanRow> = sqlx::query_as(query)
            .bind(id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find plan by ID")?;

        row.map(|r| r.try_into_plan()).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<WeeklyPlan>, DomainError> {
        let query = r#"
            SELECT id, user_id, start_date, end_date, goals, subjects, created_at
            FROM weekly_plans
            WHERE user_id = ?1
            ORDER BY start_date DESC
        "#;

        let rows: Vec<WeeklyPlanRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_all(self.base.pool())
            .await
            .with_repo_context("List plans for user")?;

        rows.into_iter().map(|r| r.try_into_plan()).collect()
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let query = "DELETE FROM weekly_plans WHERE id = ?1";

        sqlx::query(query)
            .bind(id.as_str())
            .execute(self.base.pool())
            .await
            .with_repo_context("Delete weekly plan")?;

        Ok(())
    }
}
