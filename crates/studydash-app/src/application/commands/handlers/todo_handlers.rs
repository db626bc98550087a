use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::todo_commands::*;
use crate::application::dtos::TodoDto;
use crate::application::services::IdentityService;
use studydash_domain::shared::{DomainError, TodoId, UserId};
use studydash_domain::todo::{Todo, TodoRepository};

/// Create todo command handler
pub struct CreateTodoCommandHandler {
    identity: Arc<IdentityService>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl CreateTodoCommandHandler {
    pub fn new(identity: Arc<IdentityService>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            identity,
            todo_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateTodoCommand> for CreateTodoCommandHandler {
    type Result = CreateTodoResult;

    async fn handle(&self, cmd: CreateTodoCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let todo = Todo::new(user.id().clone(), cmd.title)?;
        self.todo_repo.save(&todo).await?;

        info!("Todo created: {} for user {}", todo.id(), user.id());

        Ok(CreateTodoResult {
            todo: TodoDto::from(&todo),
        })
    }
}

/// Toggle/set todo completion
pub struct SetTodoCompletionCommandHandler {
    identity: Arc<IdentityService>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl SetTodoCompletionCommandHandler {
    pub fn new(identity: Arc<IdentityService>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            identity,
            todo_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<SetTodoCompletionCommand> for SetTodoCompletionCommandHandler {
    type Result = SetTodoCompletionResult;

    async fn handle(&self, cmd: SetTodoCompletionCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let mut todo = find_owned_todo(&*self.todo_repo, &cmd.todo_id, user.id()).await?;
        todo.set_completed(cmd.completed);
        self.todo_repo.save(&todo).await?;

        Ok(SetTodoCompletionResult {
            todo: TodoDto::from(&todo),
        })
    }
}

/// Delete todo command handler
pub struct DeleteTodoCommandHandler {
    identity: Arc<IdentityService>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl DeleteTodoCommandHandler {
    pub fn new(identity: Arc<IdentityService>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            identity,
            todo_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteTodoCommand> for DeleteTodoCommandHandler {
    type Result = DeleteTodoResult;

    async fn handle(&self, cmd: DeleteTodoCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let todo = find_owned_todo(&*self.todo_repo, &cmd.todo_id, user.id()).await?;
        self.todo_repo.delete(todo.id()).await?;

        info!("Todo deleted: {} for user {}", todo.id(), user.id());

        Ok(DeleteTodoResult {
            todo_id: cmd.todo_id,
        })
    }
}

/// A todo owned by someone else looks exactly like a missing one.
async fn find_owned_todo(
    todo_repo: &dyn TodoRepository,
    todo_id: &str,
    user_id: &UserId,
) -> Result<Todo, DomainError> {
    let todo = todo_repo
        .find_by_id(&TodoId::from_string(todo_id))
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Todo {}", todo_id)))?;

    if todo.user_id() != user_id {
        return Err(DomainError::NotFound(format!("Todo {}", todo_id)));
    }

    Ok(todo)
}
