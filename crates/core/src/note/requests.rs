//! API request types for note operations.
//!
//! These are pure data types shared between the server and any client.

use serde::{Deserialize, Serialize};

use super::types::Note;

/// Request payload for creating a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

impl CreateNoteRequest {
    /// Create a new request with the given title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            pinned: false,
        }
    }

    /// Set the pinned flag.
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Converts the request into a new note with a fresh ID and timestamps.
    pub fn into_note(self) -> Note {
        Note::new(self.title, self.content).with_pinned(self.pinned)
    }
}

/// Request payload for replacing a note's mutable fields.
///
/// This is a full replacement, not a patch: all three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
    pub pinned: bool,
}

impl UpdateNoteRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>, pinned: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            pinned,
        }
    }
}
