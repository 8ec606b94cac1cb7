//! Note repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::note::{self, ActiveModel, Entity as NoteEntity};
use crate::domain::{NewNote, Note};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note; the store assigns the identifier.
    async fn create(&self, note: NewNote) -> AppResult<Note>;

    /// All notes, oldest first.
    async fn list(&self) -> AppResult<Vec<Note>>;
}

/// SeaORM-backed NoteRepository
pub struct NoteStore {
    db: Arc<DatabaseConnection>,
}

impl NoteStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteRepository for NoteStore {
    async fn create(&self, note: NewNote) -> AppResult<Note> {
        let active_model = ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(note.title),
            description: Set(note.description),
            created: Set(note.created),
            modified: Set(note.modified),
        };

        let model = active_model.insert(&*self.db).await.map_err(AppError::from)?;
        Ok(Note::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Note>> {
        // v7 ids sort by creation time
        let models = NoteEntity::find()
            .order_by_asc(note::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Note::from).collect())
    }
}
