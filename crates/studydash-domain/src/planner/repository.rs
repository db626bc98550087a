use async_trait::async_trait;

use crate::planner::WeeklyPlan;
use crate::shared::{DomainError, PlanId, UserId};

#[async_trait]
pub trait WeeklyPlanRepository: Send + Sync {
    async fn save(&self, plan: &WeeklyPlan) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<WeeklyPlan>, DomainError>;

    /// All plans for a user, most recent week first
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<WeeklyPlan>, DomainError>;

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError>;
}
