//! Conversions between `Note` and its MongoDB document form.
//!
//! The document keeps the ObjectId under `_id` and stores timestamps as
//! native BSON datetimes, so the collection stays queryable from the shell.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};

use notes_core::note::{Note, NoteId, UpdateNoteRequest};
use notes_core::storage::{RepositoryError, Result};

/// A note as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

fn to_bson_datetime(dt: &DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(dt.timestamp_millis())
}

fn from_bson_datetime(dt: BsonDateTime, field: &str) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()).ok_or_else(|| {
        RepositoryError::Serialization(format!("{field} out of range: {}", dt.timestamp_millis()))
    })
}

/// Converts a note into the document stored for it.
pub fn note_to_document(note: &Note) -> NoteDocument {
    NoteDocument {
        id: note.id.object_id(),
        title: note.title.clone(),
        content: note.content.clone(),
        pinned: note.pinned,
        created_at: to_bson_datetime(&note.created_at),
        updated_at: to_bson_datetime(&note.updated_at),
    }
}

/// Converts a stored document back into a note.
pub fn document_to_note(doc: NoteDocument) -> Result<Note> {
    Ok(Note {
        id: NoteId::from(doc.id),
        title: doc.title,
        content: doc.content,
        pinned: doc.pinned,
        created_at: from_bson_datetime(doc.created_at, "createdAt")?,
        updated_at: from_bson_datetime(doc.updated_at, "updatedAt")?,
    })
}

/// Filter matching a single note by ID.
pub fn id_filter(id: NoteId) -> Document {
    doc! { "_id": id.object_id() }
}

/// `$set` update replacing the mutable fields and stamping `updatedAt`.
pub fn update_document(update: &UpdateNoteRequest, now: DateTime<Utc>) -> Document {
    doc! {
        "$set": {
            "title": update.title.as_str(),
            "content": update.content.as_str(),
            "pinned": update.pinned,
            "updatedAt": to_bson_datetime(&now),
        }
    }
}
