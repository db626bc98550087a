use log::info;
use std::sync::Arc;

use crate::application::dtos::{DailyLoginDto, LoginStreakDto, StreakStateDto};
use crate::application::services::IdentityService;
use studydash_domain::shared::DomainError;
use studydash_domain::streak::StreakStore;

/// Recent-login history shown in the streak widget
const RECENT_LOGIN_LIMIT: u32 = 5;

pub struct StreakQueryService {
    identity: Arc<IdentityService>,
    streak_store: Arc<dyn StreakStore>,
}

impl StreakQueryService {
    pub fn new(identity: Arc<IdentityService>, streak_store: Arc<dyn StreakStore>) -> Self {
        Self {
            identity,
            streak_store,
        }
    }

    /// Streak state for the authenticated caller.
    ///
    /// A brand-new user gets an empty state (no streak record, no
    /// logins), not an error.
    pub async fn get_streak_state(
        &self,
        principal: Option<&str>,
    ) -> Result<StreakStateDto, DomainError> {
        let user = self.identity.require_user(principal).await?;

        let streak = self.streak_store.find_streak(user.id()).await?;
        let recent = self
            .streak_store
            .recent_logins(user.id(), RECENT_LOGIN_LIMIT)
            .await?;

        info!(
            "[streak] get_streak_state user_id={} current={} longest={} recent={}",
            user.id(),
            streak.as_ref().map(|s| s.current_streak()).unwrap_or(0),
            streak.as_ref().map(|s| s.longest_streak()).unwrap_or(0),
            recent.len()
        );

        Ok(StreakStateDto {
            streak: streak.as_ref().map(LoginStreakDto::from),
            recent_logins: recent.iter().map(DailyLoginDto::from).collect(),
        })
    }
}
