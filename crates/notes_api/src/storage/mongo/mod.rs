//! MongoDB storage backend implementation.
//!
//! Notes live in a single collection; each document's `_id` is the note's
//! ObjectId.

mod conversions;
mod error;
mod repository;

pub use repository::MongoRepository;
