use std::sync::Arc;

use crate::application::dtos::WeeklyPlanDto;
use crate::application::services::IdentityService;
use studydash_domain::planner::WeeklyPlanRepository;
use studydash_domain::shared::DomainError;

pub struct WeeklyPlanQueryService {
    identity: Arc<IdentityService>,
    plan_repo: Arc<dyn WeeklyPlanRepository>,
}

impl WeeklyPlanQueryService {
    pub fn new(identity: Arc<IdentityService>, plan_repo: Arc<dyn WeeklyPlanRepository>) -> Self {
        Self {
            identity,
            plan_repo,
        }
    }

    /// Caller's weekly plans, most recent week first
    pub async fn list_plans(
        &self,
        principal: Option<&str>,
    ) -> Result<Vec<WeeklyPlanDto>, DomainError> {
        let user = self.identity.require_user(principal).await?;
        let plans = self.plan_repo.list_for_user(user.id()).await?;

        Ok(plans.iter().map(WeeklyPlanDto::from).collect())
    }
}
