use serde::{Deserialize, Serialize};

use crate::application::dtos::TodoDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoCommand {
    pub principal: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoResult {
    pub todo: TodoDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTodoCompletionCommand {
    pub principal: Option<String>,
    pub todo_id: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTodoCompletionResult {
    pub todo: TodoDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoCommand {
    pub principal: Option<String>,
    pub todo_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoResult {
    pub todo_id: String,
}
