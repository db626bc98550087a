use std::sync::Arc;

use crate::application::dtos::NoteDto;
use crate::application::services::IdentityService;
use studydash_domain::note::NoteRepository;
use studydash_domain::shared::DomainError;

pub struct NoteQueryService {
    identity: Arc<IdentityService>,
    note_repo: Arc<dyn NoteRepository>,
}

impl NoteQueryService {
    pub fn new(identity: Arc<IdentityService>, note_repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            identity,
            note_repo,
        }
    }

    /// Caller's notes, newest first
    pub async fn list_notes(&self, principal: Option<&str>) -> Result<Vec<NoteDto>, DomainError> {
        let user = self.identity.require_user(principal).await?;
        let notes = self.note_repo.list_for_user(user.id()).await?;

        Ok(notes.iter().map(NoteDto::from).collect())
    }
}
