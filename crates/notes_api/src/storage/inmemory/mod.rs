//! In-memory storage backend.
//!
//! Stores notes in a BTreeMap keyed by ID, wrapped in `Arc<RwLock<_>>`.
//! Useful for tests and local development where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use notes_api::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
