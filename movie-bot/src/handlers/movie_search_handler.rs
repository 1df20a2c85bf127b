//! Free-text handler: resolve the movie, log the search, reply.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use storage::SearchLog;

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::resolver::MovieResolver;

/// Terminal handler. Every non-empty text reaching it adds exactly one search record, whether the
/// model call succeeded or not.
pub struct MovieSearchHandler {
    bot: Arc<dyn Bot>,
    resolver: Arc<MovieResolver>,
    log: Arc<dyn SearchLog>,
    model: String,
}

impl MovieSearchHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        resolver: Arc<MovieResolver>,
        log: Arc<dyn SearchLog>,
        model: String,
    ) -> Self {
        Self {
            bot,
            resolver,
            log,
            model,
        }
    }
}

#[async_trait]
impl Handler for MovieSearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim().is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        info!(user_id = message.user.id, model = %self.model, "step: resolving movie");
        let resolution = self.resolver.resolve(&message.content, &self.model).await;
        let title = resolution.title();

        if let Err(e) = self
            .log
            .append(message.user.id, &message.content, title)
            .await
        {
            error!(error = %e, user_id = message.user.id, "Failed to log search");
        }

        let text = resolution.reply_text();
        self.bot.reply_to(message, &text).await?;
        info!(
            user_id = message.user.id,
            title = title.unwrap_or(""),
            "step: movie reply sent"
        );
        Ok(HandlerResponse::Reply(text))
    }
}
