//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notes_core::note::{now_millis, Note, NoteId, UpdateNoteRequest};
use notes_core::storage::{
    with_timeout, NoteRepository, RepositoryError, Result, OPERATION_TIMEOUT,
};

/// In-memory storage backend.
///
/// Notes are kept in a `BTreeMap` keyed by ID, so listing returns them in
/// creation order. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<BTreeMap<NoteId, Note>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn create(&self, note: Note) -> Result<Note> {
        with_timeout("insert note", OPERATION_TIMEOUT, async move {
            let mut notes = self.notes.write().await;
            if notes.contains_key(&note.id) {
                return Err(RepositoryError::QueryFailed {
                    operation: "insert note",
                    message: format!("duplicate key: {}", note.id),
                });
            }
            notes.insert(note.id, note.clone());
            Ok(note)
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Note>> {
        with_timeout("find notes", OPERATION_TIMEOUT, async move {
            let notes = self.notes.read().await;
            Ok(notes.values().cloned().collect())
        })
        .await
    }

    async fn get_by_id(&self, id: NoteId) -> Result<Note> {
        with_timeout("find note", OPERATION_TIMEOUT, async move {
            let notes = self.notes.read().await;
            notes
                .get(&id)
                .cloned()
                .ok_or_else(|| RepositoryError::note_not_found(id))
        })
        .await
    }

    async fn update_by_id(&self, id: NoteId, update: UpdateNoteRequest) -> Result<Note> {
        with_timeout("update note", OPERATION_TIMEOUT, async move {
            let mut notes = self.notes.write().await;
            let Some(note) = notes.get_mut(&id) else {
                return Err(RepositoryError::note_not_found(id));
            };

            note.title = update.title;
            note.content = update.content;
            note.pinned = update.pinned;
            note.updated_at = now_millis();

            Ok(note.clone())
        })
        .await
    }

    async fn delete_by_id(&self, id: NoteId) -> Result<bool> {
        with_timeout("delete note", OPERATION_TIMEOUT, async move {
            let mut notes = self.notes.write().await;
            Ok(notes.remove(&id).is_some())
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
