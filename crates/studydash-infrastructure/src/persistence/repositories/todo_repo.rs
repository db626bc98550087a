use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use studydash_domain::shared::{DomainError, TodoId, UserId};
use studydash_domain::todo::{Todo, TodoRepository};

#[derive(FromRow)]
struct TodoRow {
    id: String,
    user_id: String,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo::restore(
            TodoId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.title,
            self.completed,
            self.created_at,
            self.updated_at,
        )
    }
}

pub struct SqliteTodoRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTodoRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn save(&self, todo: &Todo) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO todos (id, user_id, title, completed, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = ?3,
                completed = ?4,
                updated_at = ?6
        "#;

        sqlx::query(query)
            .bind(todo.id().as_str())
            .bind(todo.user_id().as_str())
            .bind(todo.title())
            .bind(todo.is_completed())
            .bind(todo.created_at())
            .bind(todo.updated_at())
            .execute(self.base.pool())
            .await
            .with_repo_context("Save todo")?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, completed, created_at, updated_at
            FROM todos
            WHERE id = ?1
        "#;

        let row: Option<TodoRow> = sqlx::query_as(query)
            .bind(id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find todo by ID")?;

        Ok(row.map(|r| r.into_todo()))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Todo>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, completed, created_at, updated_at
            FROM todos
            WHERE user_id = ?1
            ORDER BY created_at DESC
        "#;

        let rows: Vec<TodoRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_all(self.base.pool())
            .await
            .with_repo_context("List todos for user")?;

        Ok(rows.into_iter().map(|r| r.into_todo()).collect())
    }

    async fn delete(&self, id: &TodoId) -> Result<(), DomainError> {
        let query = "DELETE FROM todos WHERE id = ?1";

        sqlx::query(query)
            .bind(id.as_str())
            .execute(self.base.pool())
            .await
            .with_repo_context("Delete todo")?;

        Ok(())
    }
}
