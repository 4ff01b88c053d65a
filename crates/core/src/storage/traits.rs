use async_trait::async_trait;

use crate::note::{Note, NoteId, UpdateNoteRequest};

use super::Result;

/// Repository for note operations.
///
/// Implementations bound every call with [`super::OPERATION_TIMEOUT`] and
/// annotate failures with the operation that failed.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Inserts a fully-populated note and returns it unchanged.
    async fn create(&self, note: Note) -> Result<Note>;

    /// Lists every note in store order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Gets a note by its ID.
    ///
    /// Returns `RepositoryError::NotFound` when no note has this ID.
    async fn get_by_id(&self, id: NoteId) -> Result<Note>;

    /// Replaces the title, content and pinned flag of a note and refreshes
    /// its `updated_at`. Returns the note as it is after the update.
    ///
    /// Returns `RepositoryError::NotFound` when no note has this ID.
    async fn update_by_id(&self, id: NoteId, update: UpdateNoteRequest) -> Result<Note>;

    /// Deletes a note by its ID.
    ///
    /// Returns `false` when nothing matched; that is not an error.
    async fn delete_by_id(&self, id: NoteId) -> Result<bool>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
