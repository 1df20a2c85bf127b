//! Search record model; one row of the `requests` table.

use serde::{Deserialize, Serialize};

/// One logged search: who asked, what they typed, which title was inferred (None when resolution failed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SearchRecord {
    /// SQLite rowid; monotonic insertion sequence.
    pub id: i64,
    pub user_id: i64,
    /// Query text exactly as typed.
    pub request: String,
    pub title: Option<String>,
}
