use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, NoteId, UserId};

/// Editable note fields, shared by create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub tags: Vec<String>,
    pub pinned: bool,
}

/// Study note aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    user_id: UserId,
    title: String,
    content: String,
    category: String,
    semester: Option<String>,
    subject: Option<String>,
    tags: Vec<String>,
    pinned: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(user_id: UserId, draft: NoteDraft) -> Result<Self, DomainError> {
        Self::validate(&draft)?;

        let now = Utc::now();
        Ok(Self {
            id: NoteId::new(),
            user_id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            semester: draft.semester,
            subject: draft.subject,
            tags: draft.tags,
            pinned: draft.pinned,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore note from persistence
    pub fn restore(
        id: NoteId,
        user_id: UserId,
        draft: NoteDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            semester: draft.semester,
            subject: draft.subject,
            tags: draft.tags,
            pinned: draft.pinned,
            created_at,
            updated_at,
        }
    }

    /// Replace the editable fields with a new draft
    pub fn update(&mut self, draft: NoteDraft) -> Result<(), DomainError> {
        Self::validate(&draft)?;

        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.semester = draft.semester;
        self.subject = draft.subject;
        self.tags = draft.tags;
        self.pinned = draft.pinned;
        self.updated_at = Utc::now();

        Ok(())
    }

    /// Whether `user_id` owns this note
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    fn validate(draft: &NoteDraft) -> Result<(), DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Note title cannot be empty".to_string(),
            ));
        }
        if draft.category.trim().is_empty() {
            return Err(DomainError::Validation(
                "Note category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
