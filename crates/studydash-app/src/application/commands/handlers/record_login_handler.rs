use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::streak_commands::*;
use crate::application::dtos::LoginStreakDto;
use crate::application::services::IdentityService;
use studydash_domain::shared::DomainError;
use studydash_domain::streak::StreakStore;

pub const ALREADY_LOGGED_MESSAGE: &str = "You have already logged in today.";
pub const RECORDED_MESSAGE: &str = "Daily login recorded successfully.";

/// Record-login command handler
pub struct RecordLoginCommandHandler {
    identity: Arc<IdentityService>,
    streak_store: Arc<dyn StreakStore>,
}

impl RecordLoginCommandHandler {
    pub fn new(identity: Arc<IdentityService>, streak_store: Arc<dyn StreakStore>) -> Self {
        Self {
            identity,
            streak_store,
        }
    }
}

#[async_trait]
impl CommandHandler<RecordLoginCommand> for RecordLoginCommandHandler {
    type Result = RecordLoginResult;

    async fn handle(&self, cmd: RecordLoginCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let recorded = self.streak_store.record_login(user.id(), Utc::now()).await?;

        info!(
            "[streak] record_login user_id={} newly_recorded={} current={} longest={}",
            user.id(),
            recorded.newly_recorded,
            recorded.streak.current_streak(),
            recorded.streak.longest_streak()
        );

        let message = if recorded.newly_recorded {
            RECORDED_MESSAGE
        } else {
            ALREADY_LOGGED_MESSAGE
        };

        Ok(RecordLoginResult {
            streak: LoginStreakDto::from(&recorded.streak),
            message: message.to_string(),
        })
    }
}
