//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `notes_core::storage::NoteRepository` trait. The backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `mongodb` (default): MongoDB backend using the official `mongodb` driver
//! - `inmemory`: BTreeMap-backed backend, no persistence
//!
//! These features are mutually exclusive. The in-memory backend is always
//! compiled for tests.
//!
//! # Examples
//!
//! Build with MongoDB (default):
//! ```bash
//! cargo build -p notes_api
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p notes_api --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "mongodb", feature = "inmemory"))]
compile_error!(
    "Features 'mongodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "mongodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'mongodb' or 'inmemory' feature. \
    Example: cargo build -p notes_api --features mongodb"
);

#[cfg(feature = "mongodb")]
pub mod mongo;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "mongodb")]
pub use mongo::MongoRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
