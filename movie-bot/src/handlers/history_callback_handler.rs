//! Navigation button presses: re-render the requested history page in place.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use std::sync::Arc;

use crate::core::{Bot, CallbackHandler, CallbackQuery, Chat, HandlerError, Result};
use crate::history::{parse_page_payload, HistoryPaginator, PAGE_PAYLOAD_PREFIX};

pub struct HistoryCallbackHandler {
    bot: Arc<dyn Bot>,
    paginator: HistoryPaginator,
}

impl HistoryCallbackHandler {
    pub fn new(bot: Arc<dyn Bot>, paginator: HistoryPaginator) -> Self {
        Self { bot, paginator }
    }
}

#[async_trait]
impl CallbackHandler for HistoryCallbackHandler {
    /// Edits the message carrying the buttons; sends a new message to the pressing user's chat
    /// when that message is no longer accessible.
    #[instrument(skip(self, query))]
    async fn handle_callback(&self, query: &CallbackQuery) -> Result<bool> {
        let Some(data) = query.data.as_deref() else {
            return Ok(false);
        };
        if !data.starts_with(PAGE_PAYLOAD_PREFIX) {
            return Ok(false);
        }
        let page = parse_page_payload(data)
            .ok_or_else(|| HandlerError::InvalidPayload(data.to_string()))?;

        let rendered = self.paginator.render_page(query.user.id, page).await?;
        let text = rendered.text();
        let buttons = rendered.buttons();
        info!(user_id = query.user.id, page, lines = rendered.lines.len(), "step: history page");

        match (&query.chat, &query.message_id) {
            (Some(chat), Some(message_id)) => {
                self.bot
                    .edit_message_with_buttons(chat, message_id, &text, &buttons)
                    .await?;
            }
            (chat, _) => {
                warn!(user_id = query.user.id, "Button message inaccessible, sending new page");
                let chat = chat.clone().unwrap_or(Chat { id: query.user.id });
                self.bot
                    .send_message_with_buttons(&chat, &text, &buttons)
                    .await?;
            }
        }
        Ok(true)
    }
}
