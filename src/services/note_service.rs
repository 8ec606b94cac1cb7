//! Note service - Saving and listing notes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewNote, Note};
use crate::errors::{AppError, AppResult};
use crate::infra::NoteRepository;

#[async_trait]
pub trait NoteService: Send + Sync {
    /// Persist a note
    async fn save(&self, note: NewNote) -> AppResult<Note>;

    /// Every stored note
    async fn list(&self) -> AppResult<Vec<Note>>;
}

pub struct NoteManager {
    notes: Arc<dyn NoteRepository>,
}

impl NoteManager {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }
}

#[async_trait]
impl NoteService for NoteManager {
    async fn save(&self, note: NewNote) -> AppResult<Note> {
        let note = self.notes.create(note).await?;
        tracing::debug!(note_id = %note.id, "Note saved");
        Ok(note)
    }

    async fn list(&self) -> AppResult<Vec<Note>> {
        self.notes.list().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to list notes");
            AppError::Unavailable
        })
    }
}
