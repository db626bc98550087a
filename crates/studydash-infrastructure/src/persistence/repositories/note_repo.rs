use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use studydash_domain::note::{Note, NoteDraft, NoteRepository};
use studydash_domain::shared::{DomainError, NoteId, UserId};

#[derive(FromRow)]
struct NoteRow {
    id: String,
    user_id: String,
    title: String,
    content: String,
    category: String,
    semester: Option<String>,
    subject: Option<String>,
    tags: String,
    pinned: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn try_into_note(self) -> Result<Note, DomainError> {
        // Tags live in a JSON column.
        let tags: Vec<String> = serde_json::from_str(&self.tags)
            .map_err(|e| DomainError::Serialization(format!("Invalid note tags: {}", e)))?;

        Ok(Note::restore(
            NoteId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            NoteDraft {
                title: self.title,
                content: self.content,
                category: self.category,
                semester: self.semester,
                subject: self.subject,
                tags,
                pinned: self.pinned,
            },
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteNoteRepository {
    base: SqliteRepositoryBase,
}

impl SqliteNoteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn save(&self, note: &Note) -> Result<(), DomainError> {
        let tags = serde_json::to_string(note.tags())
            .map_err(|e| DomainError::Serialization(format!("Serialize note tags: {}", e)))?;

        let query = r#"
            INSERT INTO notes (
                id, user_id, title, content, category,
                semester, subject, tags, pinned, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                title = ?3,
                content = ?4,
                category = ?5,
                semester = ?6,
                subject = ?7,
                tags = ?8,
                pinned = ?9,
                updated_at = ?11
        "#;

        sqlx::query(query)
            .bind(note.id().as_str())
            .bind(note.user_id().as_str())
            .bind(note.title())
            .bind(note.content())
            .bind(note.category())
            .bind(note.semester())
            .bind(note.subject())
            .bind(tags)
            .bind(note.is_pinned())
            .bind(note.created_at())
            .bind(note.updated_at())
            .execute(self.base.pool())
            .await
            .with_repo_context("Save note")?;

        Ok(())
    }

    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, content, category,
                   semester, subject, tags, pinned, created_at, updated_at
            FROM notes
            WHERE id = ?1
        "#;

        let row: Option<NoteRow> = sqlx::query_as(query)
            .bind(id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .with_repo_context("Find note by ID")?;

        row.map(|r| r.try_into_note()).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Note>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, content, category,
                   semester, subject, tags, pinned, created_at, updated_at
            FROM notes
            WHERE user_id = ?1
            ORDER BY created_at DESC
        "#;

        let rows: Vec<NoteRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_all(self.base.pool())
            .await
            .with_repo_context("List notes for user")?;

        rows.into_iter().map(|r| r.try_into_note()).collect()
    }

    async fn delete(&self, id: &NoteId) -> Result<(), DomainError> {
        let query = "DELETE FROM notes WHERE id = ?1";

        sqlx::query(query)
            .bind(id.as_str())
            .execute(self.base.pool())
            .await
            .with_repo_context("Delete note")?;

        Ok(())
    }
}
