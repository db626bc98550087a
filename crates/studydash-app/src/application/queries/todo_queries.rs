use std::sync::Arc;

use crate::application::dtos::TodoDto;
use crate::application::services::IdentityService;
use studydash_domain::shared::DomainError;
use studydash_domain::todo::TodoRepository;

pub struct TodoQueryService {
    identity: Arc<IdentityService>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl TodoQueryService {
    pub fn new(identity: Arc<IdentityService>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            identity,
            todo_repo,
        }
    }

    /// Caller's todos, newest first
    pub async fn list_todos(&self, principal: Option<&str>) -> Result<Vec<TodoDto>, DomainError> {
        let user = self.identity.require_user(principal).await?;
        let todos = self.todo_repo.list_for_user(user.id()).await?;

        Ok(todos.iter().map(TodoDto::from).collect())
    }
}
