//! Note CRUD handlers.
//!
//! Each handler parses its input, issues exactly one repository call and
//! maps the outcome to a response. Status codes and client-visible messages
//! are decided by [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use notes_core::note::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
use notes_core::storage::{with_timeout, OPERATION_TIMEOUT};

use crate::{
    handlers::ApiError,
    models::{DeleteNoteResponse, NoteList},
    state::AppState,
};

fn parse_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse::<NoteId>().map_err(|e| {
        tracing::debug!(error = %e, "Rejected note ID");
        ApiError::Validation("invalid ID")
    })
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected note payload");
        ApiError::Validation("invalid json")
    })
}

/// Create a new note (POST /notes).
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = parse_body(payload)?.into_note();

    let created = state
        .notes
        .create(note)
        .await
        .map_err(|e| ApiError::store("failed to create note", e))?;

    tracing::info!(note_id = %created.id, title = %created.title, "Created new note");

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all notes (GET /notes).
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<NoteList>, ApiError> {
    let notes = state
        .notes
        .list()
        .await
        .map_err(|e| ApiError::store("failed to list notes", e))?;

    Ok(Json(NoteList { notes }))
}

/// Get a single note by ID (GET /notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;

    let note = state
        .notes
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::store("failed to fetch the note", e))?;

    Ok(Json(note))
}

/// Replace a note's title, content and pinned flag (PUT /notes/{id}).
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    let update = parse_body(payload)?;

    let note = state
        .notes
        .update_by_id(id, update)
        .await
        .map_err(|e| ApiError::store("failed to update the note", e))?;

    tracing::info!(note_id = %id, "Updated note");

    Ok(Json(note))
}

/// Delete a note by ID (DELETE /notes/{id}).
///
/// Deleting an ID that matches nothing succeeds with `deleted: false`.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = with_timeout(
        "delete note",
        OPERATION_TIMEOUT,
        state.notes.delete_by_id(id),
    )
    .await
    .map_err(|e| ApiError::store("failed to delete the note", e))?;

    tracing::info!(note_id = %id, deleted, "Deleted note");

    Ok(Json(DeleteNoteResponse::new(deleted)))
}
