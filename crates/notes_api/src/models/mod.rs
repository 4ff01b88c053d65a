//! Response payloads that only exist at the HTTP boundary.

use serde::Serialize;

use notes_core::note::Note;

/// Response body for `GET /notes`.
#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}

/// Response body for `DELETE /notes/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub deleted: bool,
    pub message: &'static str,
}

impl DeleteNoteResponse {
    /// The message is the same whether or not a document matched.
    pub fn new(deleted: bool) -> Self {
        Self {
            deleted,
            message: "note deleted successfully",
        }
    }
}
