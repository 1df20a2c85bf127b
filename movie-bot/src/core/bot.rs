//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; [`TelegramBotAdapter`](crate::telegram::TelegramBotAdapter)
//! implements it via teloxide and tests substitute a recording mock.

use async_trait::async_trait;

use super::error::{DbotError, Result};
use super::types::{Chat, InlineButton, Message};

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a message with one row of inline buttons. An empty slice sends plain text.
    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()>;
    /// Replaces text and buttons of an already-sent message. `message_id` is transport-specific
    /// (Telegram numeric string).
    async fn edit_message_with_buttons(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edits.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
