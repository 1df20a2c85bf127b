//! # Prompt
//!
//! Chat message types and the prompt templates used to ask a model which movie a user
//! is describing.
//!
//! ## Format
//!
//! The model is asked for a strict two-line answer:
//!
//! - **Line 1**: only the movie title, wrapped in single `[square brackets]`
//! - **Line 2**: a short description
//!
//! ## External interactions
//!
//! - **AI models**: output is sent to OpenAI-compatible chat completion APIs.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// System instruction sent with every movie request.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "Отвечай быстро и точно в соответствии с форматом";

/// Builds the user prompt asking for `[title]` on the first line and a description on the second.
///
/// The raw query is embedded verbatim between guillemets.
pub fn title_and_description_prompt(query: &str) -> String {
    format!(
        "Ты ассистент, который на основании запроса пользователя даёт:\n\
         1) На ПЕРВОЙ строке — ТОЛЬКО название фильма в одинарных [квадратных скобках]\n\
         2) На второй — краткое описание\n\n\
         Не придумывай название, если не знаешь его точно.\n\n\
         Пользователь ищет «{}» — сформируй ответ в нужном формате.",
        query
    )
}

/// Returns the full message list for a movie request: optional system instruction, then the user prompt.
///
/// `system_message` of `None` falls back to [`DEFAULT_SYSTEM_MESSAGE`].
pub fn movie_request_messages(query: &str, system_message: Option<&str>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_message.unwrap_or(DEFAULT_SYSTEM_MESSAGE)),
        ChatMessage::user(title_and_description_prompt(query)),
    ]
}
