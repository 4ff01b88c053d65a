//! Error type returned by the note handlers.
//!
//! The handler layer is the only place that decides status codes and
//! client-visible messages. Store causes are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use notes_core::storage::{repository_error_to_status_code, RepositoryError};

/// Client-facing outcome of a failed request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, detected before any store call.
    #[error("{0}")]
    Validation(&'static str),
    /// No note matches the requested ID.
    #[error("note not found with this given ID")]
    NotFound,
    /// Any other store failure; `message` is what the client sees.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    /// Classifies a repository failure, keeping `message` as the generic
    /// text for anything other than a missing note.
    pub fn store(message: &'static str, source: RepositoryError) -> Self {
        if source.is_not_found() {
            Self::NotFound
        } else {
            Self::Store { message, source }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NotFound => StatusCode::BAD_REQUEST,
            Self::Store { source, .. } => {
                StatusCode::from_u16(repository_error_to_status_code(source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Store { source, .. } => {
                tracing::error!(status = %status, error = %source, "Store operation failed");
            }
            _ => tracing::warn!(status = %status, message = %self, "API error"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
