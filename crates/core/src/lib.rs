//! Core types and contracts for the notes API.
//!
//! Everything in this crate is storage- and transport-agnostic: the `Note`
//! domain type, the request payloads shared with clients, the
//! [`storage::NoteRepository`] contract implemented by the server's storage
//! backends, and the pure mapping from storage errors to HTTP status codes.

pub mod note;
pub mod storage;
