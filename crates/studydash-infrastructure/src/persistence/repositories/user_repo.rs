use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use studydash_domain::shared::{DomainError, UserId};
use studydash_domain::user::{User, UserRepository};

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User::restore(
            UserId::from_string(&self.id),
            self.email,
            self.name,
            self.created_at,
        )
    }
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, email, name, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                email = ?2,
                name = ?3
        "#;

        sqlx::query(query)
            .bind(user.id().as_str())
            .bind(user.email())
            .bind(user.name())
            .bind(user.created_at())
            .execute(self.base.pool())
            .await
            .with_repo_context("Save user")?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, name, created_at FROM users WHERE id = ?1";

        let row: Option<UserRow> = sqlx::query_as(query)
            .bind(id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find user by ID")?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, name, created_at FROM users WHERE email = ?1";

        let row: Option<UserRow> = sqlx::query_as(query)
            .bind(email)
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find user by email")?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let query = "DELETE FROM users WHERE id = ?1";

        sqlx::query(query)
            .bind(id.as_str())
            .execute(self.base.pool())
            .await
            .with_repo_context("Delete user")?;

        Ok(())
    }
}
