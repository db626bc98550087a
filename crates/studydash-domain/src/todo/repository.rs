use async_trait::async_trait;

use crate::shared::{DomainError, TodoId, UserId};
use crate::todo::Todo;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn save(&self, todo: &Todo) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    /// All todos for a user, newest first
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Todo>, DomainError>;

    async fn delete(&self, id: &TodoId) -> Result<(), DomainError>;
}
