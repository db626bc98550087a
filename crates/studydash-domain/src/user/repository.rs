use async_trait::async_trait;

use crate::shared::{DomainError, UserId};
use crate::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
