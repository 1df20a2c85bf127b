//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// OpenRouter, the default provider.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Free-tier model used unless MODEL says otherwise.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
/// Output token cap for every completion.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn max_tokens(&self) -> u32;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. OPENROUTER_API_KEY is required.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("OPENROUTER_API_KEY not set")?;
        let base_url =
            env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens = env::var("LLM_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            system_prompt,
        })
    }
}
