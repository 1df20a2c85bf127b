//! Search log trait. Implementations (e.g. [`SearchRepository`](crate::SearchRepository)) provide concrete persistence.

use async_trait::async_trait;

use super::error::StorageError;
use super::models::SearchRecord;

/// Append-only log of searches. Rows are never updated or deleted; reads only see one user's rows.
#[async_trait]
pub trait SearchLog: Send + Sync {
    /// Appends one record and returns it with its assigned row sequence.
    async fn append(
        &self,
        user_id: i64,
        request: &str,
        title: Option<&str>,
    ) -> Result<SearchRecord, StorageError>;

    /// Returns up to `limit` records of the user, newest first, skipping the newest `offset`.
    async fn history(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SearchRecord>, StorageError>;

    /// Returns every record of the user, newest first.
    async fn all_for_user(&self, user_id: i64) -> Result<Vec<SearchRecord>, StorageError>;
}
