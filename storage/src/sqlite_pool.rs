//! SQLite connection pool wrapper for the storage crate.
//!
//! Accepts a plain path (`movie_bot.sqlite`, `file:./movie_bot.sqlite`) or a sqlx URL
//! (`sqlite://...`, `sqlite::memory:`); the database file is created if it does not exist.

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Manages a single SQLite pool; creates the database file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL (file path or in-memory).
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        info!("Initializing SQLite pool: {}", database_url);

        let in_memory = database_url.contains(":memory:");
        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?
        } else {
            SqliteConnectOptions::new().filename(database_url.trim_start_matches("file:"))
        };
        let options = options.create_if_missing(true);

        // An in-memory database lives as long as its connection; keep exactly one open.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every connection; later queries fail.
    pub async fn close(&self) {
        info!("Closing SQLite pool");
        self.pool.close().await;
    }
}
