//! Search configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// DuckDuckGo's JavaScript-free results page.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://html.duckduckgo.com/html/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub trait SearchConfig: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

/// Search config loaded from SEARCH_BASE_URL and SEARCH_TIMEOUT_SECS.
#[derive(Debug, Clone)]
pub struct EnvSearchConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl SearchConfig for EnvSearchConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Default for EnvSearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EnvSearchConfig {
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("SEARCH_BASE_URL").unwrap_or_else(|_| DEFAULT_SEARCH_BASE_URL.to_string());
        let timeout_secs = env::var("SEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    /// Fails when SEARCH_BASE_URL is not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("SEARCH_BASE_URL is not a valid URL: {}", self.base_url);
        }
        Ok(())
    }
}
