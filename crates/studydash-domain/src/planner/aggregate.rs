use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, PlanId, UserId};

/// One week of planned goals and subjects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    id: PlanId,
    user_id: UserId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    goals: Vec<String>,
    subjects: Vec<String>,
    created_at: DateTime<Utc>,
}

impl WeeklyPlan {
    pub fn new(
        user_id: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        goals: Vec<String>,
        subjects: Vec<String>,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::Validation(format!(
                "Plan ends before it starts: {} > {}",
                start_date, end_date
            )));
        }

        if goals.is_empty() {
            return Err(DomainError::Validation(
                "Weekly plan needs at least one goal".to_string(),
            ));
        }

        if subjects.is_empty() {
            return Err(DomainError::Validation(
                "Weekly plan needs at least one subject".to_string(),
            ));
        }

        Ok(Self {
            id: PlanId::new(),
            user_id,
            start_date,
            end_date,
            goals,
            subjects,
            created_at: Utc::now(),
        })
    }

    /// Restore plan from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PlanId,
        user_id: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        goals: Vec<String>,
        subjects: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            start_date,
            end_date,
            goals,
            subjects,
            created_at,
        }
    }

    /// Whether `user_id` owns this plan
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // Getters
    pub fn id(&self) -> &PlanId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
