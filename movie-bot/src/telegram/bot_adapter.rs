//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl.

use crate::core::{parse_message_id, Bot as CoreBot, Chat, DbotError, InlineButton, Message, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId},
};

/// One keyboard row with the buttons in order.
pub fn keyboard(buttons: &[InlineButton]) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = buttons
        .iter()
        .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.payload.clone()))
        .collect();
    let rows = if row.is_empty() { Vec::new() } else { vec![row] };
    InlineKeyboardMarkup::new(rows)
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        if buttons.is_empty() {
            return self.send_message(chat, text).await;
        }
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(buttons))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit_message_with_buttons(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .reply_markup(keyboard(buttons))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
