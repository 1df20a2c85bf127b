//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation. Transport-agnostic;
//! used by the movie resolver and the CLI.
//!
//! The model is an explicit argument of every request, so callers can switch models per call
//! (see [`catalog`]) without mutating the client.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

pub mod catalog;
mod config;
mod openai_llm;

pub use catalog::{filter_models, select_model};
pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: completion for a list of messages, and the provider's model catalog.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system, then user) using `model`.
    async fn get_llm_response_with_messages(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String>;

    /// Returns every model id the provider offers.
    async fn list_models(&self) -> Result<Vec<String>>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
