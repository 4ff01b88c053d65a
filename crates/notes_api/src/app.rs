use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        notes::{create_note, delete_note, get_note, list_notes, update_note},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// `request_timeout` bounds a whole request; each store call inside it is
/// additionally bounded by the repository's own operation timeout. A request
/// cut short by the deadline is a server failure, so it answers 500.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let note_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(note_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use notes_core::note::{Note, NoteId, UpdateNoteRequest};
    use notes_core::storage::{NoteRepository, Result};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Repository that never answers within a test's request deadline.
    struct StalledRepository;

    impl StalledRepository {
        async fn stall<T>(&self) -> Result<T> {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Err(notes_core::storage::RepositoryError::Timeout {
                operation: "stalled",
            })
        }
    }

    #[async_trait]
    impl NoteRepository for StalledRepository {
        async fn create(&self, _note: Note) -> Result<Note> {
            self.stall().await
        }

        async fn list(&self) -> Result<Vec<Note>> {
            self.stall().await
        }

        async fn get_by_id(&self, _id: NoteId) -> Result<Note> {
            self.stall().await
        }

        async fn update_by_id(&self, _id: NoteId, _update: UpdateNoteRequest) -> Result<Note> {
            self.stall().await
        }

        async fn delete_by_id(&self, _id: NoteId) -> Result<bool> {
            self.stall().await
        }

        async fn ping(&self) -> Result<()> {
            self.stall().await
        }
    }

    fn app() -> Router {
        create_app(AppState::default(), Duration::from_secs(10))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_livez() {
        let (status, _) = send(&app(), "GET", "/livez", None).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_with_in_memory_store() {
        let (status, body) = send(&app(), "GET", "/readyz", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "healthy": true }));
    }

    #[tokio::test]
    async fn test_list_notes_empty() {
        let (status, body) = send(&app(), "GET", "/notes", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "notes": [] }));
    }

    #[tokio::test]
    async fn test_create_note_defaults_pinned() {
        let (status, note) = send(
            &app(),
            "POST",
            "/notes",
            Some(json!({ "title": "T", "content": "C" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(note["pinned"], false);
        assert_eq!(note["id"].as_str().unwrap().len(), 24);
        assert_eq!(note["createdAt"], note["updatedAt"]);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let app = app();
        let body = json!({ "title": "T", "content": "C" });

        let (_, first) = send(&app, "POST", "/notes", Some(body.clone())).await;
        let (_, second) = send(&app, "POST", "/notes", Some(body)).await;

        assert_ne!(first["id"], second["id"]);

        let (_, list) = send(&app, "GET", "/notes", None).await;
        assert_eq!(list["notes"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let app = app();

        // Create
        let (status, created) = send(
            &app,
            "POST",
            "/notes",
            Some(json!({ "title": "T", "content": "C", "pinned": false })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "T");
        assert_eq!(created["content"], "C");
        assert_eq!(created["pinned"], false);
        assert!(created["id"].is_string());
        assert!(created["createdAt"].is_string());
        assert!(created["updatedAt"].is_string());

        let uri = format!("/notes/{}", created["id"].as_str().unwrap());

        // Get returns an identical body
        let (status, fetched) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        // Update replaces every mutable field
        tokio::time::sleep(Duration::from_millis(5)).await;
        let (status, updated) = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "title": "T2", "content": "C2", "pinned": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["title"], "T2");
        assert_eq!(updated["content"], "C2");
        assert_eq!(updated["pinned"], true);
        assert_eq!(updated["createdAt"], created["createdAt"]);
        let before: chrono::DateTime<chrono::Utc> =
            created["updatedAt"].as_str().unwrap().parse().unwrap();
        let after: chrono::DateTime<chrono::Utc> =
            updated["updatedAt"].as_str().unwrap().parse().unwrap();
        assert!(after > before);

        // Delete
        let (status, deleted) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            deleted,
            json!({ "deleted": true, "message": "note deleted successfully" })
        );

        // Gone
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "note not found with this given ID" }));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_an_error() {
        let app = app();
        let (_, created) = send(
            &app,
            "POST",
            "/notes",
            Some(json!({ "title": "T", "content": "C" })),
        )
        .await;
        let uri = format!("/notes/{}", created["id"].as_str().unwrap());

        let (status, first) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["deleted"], true);

        let (status, second) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            second,
            json!({ "deleted": false, "message": "note deleted successfully" })
        );
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = app();
        let uri = format!("/notes/{}", notes_core::note::NoteId::new());

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "note not found with this given ID" }));

        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "title": "T", "content": "C", "pinned": false })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "note not found with this given ID" }));

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], false);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let (status, body) = send(&app(), "GET", "/notes/not-a-valid-id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "invalid ID" }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/notes")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "invalid json" }));
    }

    #[tokio::test]
    async fn test_request_deadline_cancelling_store_call_is_500() {
        let app = create_app(
            AppState::with_repository(Arc::new(StalledRepository)),
            Duration::from_millis(100),
        );
        let request = Request::builder()
            .method("GET")
            .uri("/notes")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
