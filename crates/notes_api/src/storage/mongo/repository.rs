//! MongoDB repository implementation.
//!
//! Implements `notes_core::storage::NoteRepository` on top of a single
//! collection.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use notes_core::note::{now_millis, Note, NoteId, UpdateNoteRequest};
use notes_core::storage::{
    with_timeout, NoteRepository, RepositoryError, Result, OPERATION_TIMEOUT,
};

use super::conversions::{
    document_to_note, id_filter, note_to_document, update_document, NoteDocument,
};
use super::error::map_mongo_error;

/// MongoDB-based repository implementation.
///
/// The client is cheap to clone and pools connections internally, so a
/// single repository is shared by every request.
#[derive(Clone)]
pub struct MongoRepository {
    client: Client,
    database: Database,
    collection: Collection<NoteDocument>,
}

impl MongoRepository {
    /// Creates a repository over an already-connected client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<NoteDocument>(collection);

        Self {
            client,
            database,
            collection,
        }
    }

    /// Connects to MongoDB and verifies the server answers a ping.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self::new(client, database, collection);
        repo.ping().await?;

        tracing::info!(database, collection, "Connected to MongoDB");

        Ok(repo)
    }

    /// Closes the client's connections and background tasks.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client closed");
    }

    async fn insert(&self, note: Note) -> Result<Note> {
        self.collection
            .insert_one(note_to_document(&note))
            .await
            .map_err(|e| map_mongo_error(e, "insert note"))?;

        Ok(note)
    }

    async fn find_all(&self) -> Result<Vec<Note>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| map_mongo_error(e, "find notes"))?;

        let documents: Vec<NoteDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| map_mongo_error(e, "decode notes"))?;

        documents.into_iter().map(document_to_note).collect()
    }

    async fn find_one(&self, id: NoteId) -> Result<Note> {
        let document = self
            .collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| map_mongo_error(e, "find note"))?
            .ok_or_else(|| RepositoryError::note_not_found(id))?;

        document_to_note(document)
    }

    async fn replace_fields(&self, id: NoteId, update: UpdateNoteRequest) -> Result<Note> {
        let document = self
            .collection
            .find_one_and_update(id_filter(id), update_document(&update, now_millis()))
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| map_mongo_error(e, "update note"))?
            .ok_or_else(|| RepositoryError::note_not_found(id))?;

        document_to_note(document)
    }

    async fn delete_one(&self, id: NoteId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(|e| map_mongo_error(e, "delete note"))?;

        Ok(result.deleted_count > 0)
    }

    async fn run_ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| map_mongo_error(e, "ping"))?;

        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MongoRepository {
    async fn create(&self, note: Note) -> Result<Note> {
        with_timeout("insert note", OPERATION_TIMEOUT, self.insert(note)).await
    }

    async fn list(&self) -> Result<Vec<Note>> {
        with_timeout("find notes", OPERATION_TIMEOUT, self.find_all()).await
    }

    async fn get_by_id(&self, id: NoteId) -> Result<Note> {
        with_timeout("find note", OPERATION_TIMEOUT, self.find_one(id)).await
    }

    async fn update_by_id(&self, id: NoteId, update: UpdateNoteRequest) -> Result<Note> {
        with_timeout("update note", OPERATION_TIMEOUT, self.replace_fields(id, update)).await
    }

    async fn delete_by_id(&self, id: NoteId) -> Result<bool> {
        with_timeout("delete note", OPERATION_TIMEOUT, self.delete_one(id)).await
    }

    async fn ping(&self) -> Result<()> {
        with_timeout("ping", OPERATION_TIMEOUT, self.run_ping()).await
    }
}
