use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::plan_commands::*;
use crate::application::dtos::WeeklyPlanDto;
use crate::application::services::IdentityService;
use studydash_domain::planner::{WeeklyPlan, WeeklyPlanRepository};
use studydash_domain::shared::{DomainError, PlanId};

/// Create weekly plan command handler
pub struct CreateWeeklyPlanCommandHandler {
    identity: Arc<IdentityService>,
    plan_repo: Arc<dyn WeeklyPlanRepository>,
}

impl CreateWeeklyPlanCommandHandler {
    pub fn new(identity: Arc<IdentityService>, plan_repo: Arc<dyn WeeklyPlanRepository>) -> Self {
        Self {
            identity,
            plan_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateWeeklyPlanCommand> for CreateWeeklyPlanCommandHandler {
    type Result = CreateWeeklyPlanResult;

    async fn handle(&self, cmd: CreateWeeklyPlanCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let plan = WeeklyPlan::new(
            user.id().clone(),
            cmd.start_date,
            cmd.end_date,
            cmd.goals,
            cmd.subjects,
        )?;
        self.plan_repo.save(&plan).await?;

        info!(
            "Weekly plan created: {} ({} - {}) for user {}",
            plan.id(),
            plan.start_date(),
            plan.end_date(),
            user.id()
        );

        Ok(CreateWeeklyPlanResult {
            plan: WeeklyPlanDto::from(&plan),
        })
    }
}

/// Delete weekly plan command handler
pub struct DeleteWeeklyPlanCommandHandler {
    identity: Arc<IdentityService>,
    plan_repo: Arc<dyn WeeklyPlanRepository>,
}

impl DeleteWeeklyPlanCommandHandler {
    pub fn new(identity: Arc<IdentityService>, plan_repo: Arc<dyn WeeklyPlanRepository>) -> Self {
        Self {
            identity,
            plan_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteWeeklyPlanCommand> for DeleteWeeklyPlanCommandHandler {
    type Result = DeleteWeeklyPlanResult;

    async fn handle(&self, cmd: DeleteWeeklyPlanCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let plan = self
            .plan_repo
            .find_by_id(&PlanId::from_string(&cmd.plan_id))
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Weekly plan {}", cmd.plan_id)))?;

        if !plan.is_owned_by(user.id()) {
            return Err(DomainError::NotFound(format!(
                "Weekly plan {}",
                cmd.plan_id
            )));
        }

        self.plan_repo.delete(plan.id()).await?;

        info!("Weekly plan deleted: {} for user {}", plan.id(), user.id());

        Ok(DeleteWeeklyPlanResult {
            plan_id: cmd.plan_id,
        })
    }
}
