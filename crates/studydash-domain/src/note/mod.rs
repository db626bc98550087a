mod aggregate;
mod repository;

pub use aggregate::{Note, NoteDraft};
pub use repository::NoteRepository;
