mod error;
mod requests;
mod types;

pub use error::NoteIdError;
pub use requests::{CreateNoteRequest, UpdateNoteRequest};
pub use types::{now_millis, Note, NoteId};
