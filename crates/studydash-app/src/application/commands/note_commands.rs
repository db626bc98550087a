use serde::{Deserialize, Serialize};

use crate::application::dtos::{NoteDraftDto, NoteDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteCommand {
    pub principal: Option<String>,
    pub draft: NoteDraftDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteResult {
    pub note: NoteDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteCommand {
    pub principal: Option<String>,
    pub note_id: String,
    pub draft: NoteDraftDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteResult {
    pub note: NoteDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNoteCommand {
    pub principal: Option<String>,
    pub note_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNoteResult {
    pub note_id: String,
}
