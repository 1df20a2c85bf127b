//! # Web search
//!
//! Finds the first result link for a query. [`LinkSearcher`] is the seam used by the movie
//! resolver; [`DuckDuckGoSearcher`] queries the DuckDuckGo HTML endpoint (no API key).

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod duckduckgo;

pub use config::{EnvSearchConfig, SearchConfig, DEFAULT_SEARCH_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use duckduckgo::{extract_first_link, DuckDuckGoSearcher};

/// Returns the first search result link for `query`, or `None` when there are no results.
#[async_trait]
pub trait LinkSearcher: Send + Sync {
    async fn first_link(&self, query: &str) -> Result<Option<String>>;
}
