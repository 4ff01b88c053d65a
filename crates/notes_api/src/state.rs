//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only ever see the repository trait object; the
//! concrete backend is picked at compile time via feature flags.

use std::sync::Arc;

use notes_core::storage::NoteRepository;

#[cfg(feature = "mongodb")]
use crate::storage::MongoRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is the only shared
/// resource and is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    /// Note repository.
    pub notes: Arc<dyn NoteRepository>,
    /// Handle kept to close the MongoDB client on shutdown.
    #[cfg(feature = "mongodb")]
    mongo: Option<MongoRepository>,
}

impl AppState {
    /// Creates an AppState around an arbitrary repository.
    pub fn with_repository(notes: Arc<dyn NoteRepository>) -> Self {
        Self {
            notes,
            #[cfg(feature = "mongodb")]
            mongo: None,
        }
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    /// Creates AppState backed by an empty in-memory repository.
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "mongodb")]
mod mongodb_backend {
    use anyhow::Context;

    use super::*;
    use crate::config::Config;

    impl AppState {
        /// Creates AppState with MongoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let uri = config
                .mongo_uri
                .as_deref()
                .context("MONGO_URI must be set when using the mongodb backend")?;

            let repo = MongoRepository::connect(uri, &config.mongo_db, &config.collection)
                .await
                .context("database connection failed")?;

            let mut state = Self::with_repository(Arc::new(repo.clone()));
            state.mongo = Some(repo);
            Ok(state)
        }

        /// Closes the MongoDB client. Called once the server has stopped.
        pub async fn shutdown(&self) {
            if let Some(mongo) = &self.mongo {
                mongo.shutdown().await;
            }
        }
    }
}

#[cfg(all(feature = "inmemory", not(feature = "mongodb")))]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, notes will not be persisted");
            Ok(Self::default())
        }

        /// Nothing to release for in-memory storage.
        pub async fn shutdown(&self) {}
    }
}
