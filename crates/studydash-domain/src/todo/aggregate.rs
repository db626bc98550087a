use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, TodoId, UserId};

/// To-do list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    user_id: UserId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(user_id: UserId, title: String) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Todo title cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: TodoId::new(),
            user_id,
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore todo from persistence
    pub fn restore(
        id: TodoId,
        user_id: UserId,
        title: String,
        completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            completed,
            created_at,
            updated_at,
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_starts_open() {
        let todo = Todo::new(UserId::new(), "Revise algebra".to_string()).unwrap();

        assert_eq!(todo.title(), "Revise algebra");
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Todo::new(UserId::new(), "   ".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_completion() {
        let mut todo = Todo::new(UserId::new(), "Hand in essay".to_string()).unwrap();

        todo.set_completed(true);
        assert!(todo.is_completed());

        todo.set_completed(false);
        assert!(!todo.is_completed());
    }
}
