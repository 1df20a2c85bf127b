//! App extensions: LLM provider and web search configs, both implemented in their own crates.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};
use web_search::{EnvSearchConfig, SearchConfig};

/// Application extension config. Implement this trait to inject custom config.
pub trait AppExtensions: Send + Sync {
    fn llm_config(&self) -> &dyn LlmConfig;
    fn search_config(&self) -> &dyn SearchConfig;
}

/// Env-backed extensions used by the bot and the CLI.
#[derive(Debug, Clone)]
pub struct BaseAppExtensions {
    pub llm: EnvLlmConfig,
    pub search: EnvSearchConfig,
}

impl AppExtensions for BaseAppExtensions {
    fn llm_config(&self) -> &dyn LlmConfig {
        &self.llm
    }
    fn search_config(&self) -> &dyn SearchConfig {
        &self.search
    }
}

impl BaseAppExtensions {
    /// Load from environment variables. Fails when OPENROUTER_API_KEY is missing.
    pub fn from_env() -> Result<Self> {
        let llm = EnvLlmConfig::from_env()?;
        let search = EnvSearchConfig::from_env()?;
        Ok(Self { llm, search })
    }

    /// Validate provider and search endpoints.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            anyhow::bail!(
                "OPENROUTER_BASE_URL is not a valid URL: {}",
                self.llm.base_url()
            );
        }
        self.search.validate()
    }
}
