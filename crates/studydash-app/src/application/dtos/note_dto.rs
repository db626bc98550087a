use serde::{Deserialize, Serialize};

use studydash_domain::note::{Note, NoteDraft};

/// Incoming note payload, shared by create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraftDto {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}

impl From<NoteDraftDto> for NoteDraft {
    fn from(dto: NoteDraftDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            category: dto.category,
            semester: dto.semester,
            subject: dto.subject,
            tags: dto.tags,
            pinned: dto.pinned,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Note> for NoteDto {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().as_str().to_string(),
            title: note.title().to_string(),
            content: note.content().to_string(),
            category: note.category().to_string(),
            semester: note.semester().map(str::to_string),
            subject: note.subject().map(str::to_string),
            tags: note.tags().to_vec(),
            pinned: note.is_pinned(),
            created_at: note.created_at().to_rfc3339(),
            updated_at: note.updated_at().to_rfc3339(),
        }
    }
}
