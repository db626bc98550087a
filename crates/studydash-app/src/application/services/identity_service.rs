use log::info;
use std::sync::Arc;

use studydash_domain::shared::DomainError;
use studydash_domain::user::{User, UserRepository};

/// Resolves the already-validated principal from the external auth
/// layer into a local user record. Never touches credentials.
pub struct IdentityService {
    user_repo: Arc<dyn UserRepository>,
}

impl IdentityService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Look up the user behind a principal email.
    ///
    /// A missing principal means the request never passed the auth
    /// layer; a missing user means the account was deleted after the
    /// session was issued.
    pub async fn require_user(&self, principal: Option<&str>) -> Result<User, DomainError> {
        let email = principal.ok_or_else(|| {
            DomainError::Unauthenticated("No authenticated session".to_string())
        })?;

        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(email.to_string()))
    }

    /// Provision a user profile for a freshly signed-up account
    pub async fn register(&self, email: String, name: String) -> Result<User, DomainError> {
        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            return Err(DomainError::Validation(format!(
                "User already exists: {}",
                existing.email()
            )));
        }

        let user = User::new(email, name)?;
        self.user_repo.save(&user).await?;

        info!(
            "User registered: {} ({})",
            user.email(),
            user.id().as_str()
        );

        Ok(user)
    }
}
