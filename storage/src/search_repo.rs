//! Search repository: the SQLite-backed [`SearchLog`].
//!
//! Table `requests(user_id, request, title)`; ordering uses the implicit `rowid`.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::error::StorageError;
use crate::models::SearchRecord;
use crate::repository::SearchLog;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SearchRepository {
    pool_manager: SqlitePoolManager,
}

impl SearchRepository {
    /// Opens (or creates) the database and ensures the table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating requests table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS requests (
                user_id INTEGER NOT NULL,
                request TEXT NOT NULL,
                title TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_requests_user_id ON requests(user_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Closes the underlying pool. Call once at shutdown.
    pub async fn close(&self) {
        self.pool_manager.close().await;
    }
}

#[async_trait]
impl SearchLog for SearchRepository {
    #[instrument(skip(self, request))]
    async fn append(
        &self,
        user_id: i64,
        request: &str,
        title: Option<&str>,
    ) -> Result<SearchRecord, StorageError> {
        let result = sqlx::query("INSERT INTO requests (user_id, request, title) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(request)
            .bind(title)
            .execute(self.pool_manager.pool())
            .await?;

        let id = result.last_insert_rowid();
        info!(id = id, user_id = user_id, title = ?title, "Saved search record");

        Ok(SearchRecord {
            id,
            user_id,
            request: request.to_string(),
            title: title.map(str::to_string),
        })
    }

    async fn history(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SearchRecord>, StorageError> {
        if offset < 0 || limit < 0 {
            return Err(StorageError::InvalidArgument(format!(
                "offset={} limit={}",
                offset, limit
            )));
        }

        let records = sqlx::query_as::<_, SearchRecord>(
            "SELECT rowid AS id, user_id, request, title FROM requests \
             WHERE user_id = ? ORDER BY rowid DESC LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!(
            user_id = user_id,
            offset = offset,
            limit = limit,
            count = records.len(),
            "Retrieved history page"
        );
        Ok(records)
    }

    async fn all_for_user(&self, user_id: i64) -> Result<Vec<SearchRecord>, StorageError> {
        let records = sqlx::query_as::<_, SearchRecord>(
            "SELECT rowid AS id, user_id, request, title FROM requests \
             WHERE user_id = ? ORDER BY rowid DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!(user_id = user_id, count = records.len(), "Retrieved full history");
        Ok(records)
    }
}
