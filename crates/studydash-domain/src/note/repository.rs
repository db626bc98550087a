use async_trait::async_trait;

use crate::note::Note;
use crate::shared::{DomainError, NoteId, UserId};

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn save(&self, note: &Note) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, DomainError>;

    /// All notes for a user, newest first
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Note>, DomainError>;

    async fn delete(&self, id: &NoteId) -> Result<(), DomainError>;
}
