//! OpenAI-compatible [`LlmClient`]: wraps openai-client with a fixed output token cap.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, DEFAULT_MAX_TOKENS};

/// [`LlmClient`] backed by openai-client (OpenRouter or any OpenAI-compatible endpoint).
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    max_tokens: u32,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn get_llm_response_with_messages(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        self.client
            .chat_completion(model, openai_messages, self.max_tokens)
            .await
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<String>> {
        self.client.list_models().await
    }
}
