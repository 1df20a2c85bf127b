//! # OpenAI-compatible API client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion with an output token cap,
//! plus the `GET /models` catalog of OpenAI-compatible providers (e.g. OpenRouter).
//! Provides token masking for safe logging.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use serde::Deserialize;
use std::sync::Arc;
use tracing;

pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If the key has at most 11 chars, returns "***" to avoid leaking any part of it.
/// Counts chars, not bytes.
pub fn mask_token(token: &str) -> String {
    let chars = token.chars().count();
    if chars <= 11 {
        return "***".to_string();
    }
    let head_end = token
        .char_indices()
        .nth(7)
        .map_or(token.len(), |(i, _)| i);
    let tail_start = token
        .char_indices()
        .nth(chars - 4)
        .map_or(token.len(), |(i, _)| i);
    format!("{}***{}", &token[..head_end], &token[tail_start..])
}

/// One entry of the provider's model catalog. Only the id is read; providers add many more fields.
#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

/// OpenAI-compatible chat client. Wraps the async-openai client for completions and a reqwest
/// client for the model catalog.
#[derive(Clone)]
pub struct OpenAIClient {
    /// Shared async-openai client used for chat completions.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// Plain HTTP client for `GET {api_base}/models`.
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenAIClient {
    /// Builds a client with a custom base URL (OpenRouter, proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_base = base_url.trim_end_matches('/').to_string();
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(api_base.clone());
        Self {
            client: Arc::new(Client::with_config(config)),
            http: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    /// Sends a non-streamed chat completion request without tools and returns the first choice's text.
    ///
    /// Logs masked API key, request JSON, and token usage. Errors when the response has no choices.
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        max_tokens: u32,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = max_tokens,
            api_key = %mask_token(&self.api_key),
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .max_tokens(max_tokens)
            .stream(false)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from model {}", model),
        }
    }

    /// Returns every model id in the provider catalog (`GET {api_base}/models`), in catalog order.
    pub async fn list_models(&self) -> anyhow::Result<Vec<String>> {
        let url = format!("{}/models", self.api_base);
        tracing::info!(url = %url, api_key = %mask_token(&self.api_key), "Listing models");

        let list: ModelList = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(count = list.data.len(), "Model catalog received");
        Ok(list.data.into_iter().map(|m| m.id).collect())
    }
}
