use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::note_commands::*;
use crate::application::dtos::NoteDto;
use crate::application::services::IdentityService;
use studydash_domain::note::{Note, NoteRepository};
use studydash_domain::shared::{DomainError, NoteId, UserId};

/// Create note command handler
pub struct CreateNoteCommandHandler {
    identity: Arc<IdentityService>,
    note_repo: Arc<dyn NoteRepository>,
}

impl CreateNoteCommandHandler {
    pub fn new(identity: Arc<IdentityService>, note_repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            identity,
            note_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateNoteCommand> for CreateNoteCommandHandler {
    type Result = CreateNoteResult;

    async fn handle(&self, cmd: CreateNoteCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let note = Note::new(user.id().clone(), cmd.draft.into())?;
        self.note_repo.save(&note).await?;

        info!("Note created: {} for user {}", note.id(), user.id());

        Ok(CreateNoteResult {
            note: NoteDto::from(&note),
        })
    }
}

/// Update note command handler
pub struct UpdateNoteCommandHandler {
    identity: Arc<IdentityService>,
    note_repo: Arc<dyn NoteRepository>,
}

impl UpdateNoteCommandHandler {
    pub fn new(identity: Arc<IdentityService>, note_repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            identity,
            note_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateNoteCommand> for UpdateNoteCommandHandler {
    type Result = UpdateNoteResult;

    async fn handle(&self, cmd: UpdateNoteCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let mut note = find_owned_note(&*self.note_repo, &cmd.note_id, user.id()).await?;
        note.update(cmd.draft.into())?;
        self.note_repo.save(&note).await?;

        Ok(UpdateNoteResult {
            note: NoteDto::from(&note),
        })
    }
}

/// Delete note command handler
pub struct DeleteNoteCommandHandler {
    identity: Arc<IdentityService>,
    note_repo: Arc<dyn NoteRepository>,
}

impl DeleteNoteCommandHandler {
    pub fn new(identity: Arc<IdentityService>, note_repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            identity,
            note_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteNoteCommand> for DeleteNoteCommandHandler {
    type Result = DeleteNoteResult;

    async fn handle(&self, cmd: DeleteNoteCommand) -> Result<Self::Result, DomainError> {
        let user = self.identity.require_user(cmd.principal.as_deref()).await?;

        let note = find_owned_note(&*self.note_repo, &cmd.note_id, user.id()).await?;
        self.note_repo.delete(note.id()).await?;

        info!("Note deleted: {} for user {}", note.id(), user.id());

        Ok(DeleteNoteResult {
            note_id: cmd.note_id,
        })
    }
}

/// A note owned by someone else looks exactly like a missing one.
async fn find_owned_note(
    note_repo: &dyn NoteRepository,
    note_id: &str,
    user_id: &UserId,
) -> Result<Note, DomainError> {
    let note = note_repo
        .find_by_id(&NoteId::from_string(note_id))
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Note {}", note_id)))?;

    if !note.is_owned_by(user_id) {
        return Err(DomainError::NotFound(format!("Note {}", note_id)));
    }

    Ok(note)
}
