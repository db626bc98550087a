use serde::{Deserialize, Serialize};

use studydash_domain::todo::Todo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().as_str().to_string(),
            title: todo.title().to_string(),
            completed: todo.is_completed(),
            created_at: todo.created_at().to_rfc3339(),
            updated_at: todo.updated_at().to_rfc3339(),
        }
    }
}
