//! Storage crate: the append-only search log.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – SearchRecord
//! - [`repository`] – SearchLog trait
//! - [`search_repo`] – SearchRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod search_repo;
mod sqlite_pool;

pub use error::StorageError;
pub use models::SearchRecord;
pub use repository::SearchLog;
pub use search_repo::SearchRepository;
pub use sqlite_pool::SqlitePoolManager;
