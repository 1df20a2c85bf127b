//! Data models for storage.

mod search_record;

pub use search_record::SearchRecord;
