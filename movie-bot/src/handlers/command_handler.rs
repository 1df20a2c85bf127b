//! `/start`, `/help`, `/stats` and `/history`. Any other text continues down the chain.

use async_trait::async_trait;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use storage::SearchLog;

use super::commands::{parse_command, Command};
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::history::HistoryPaginator;
use crate::stats::render_stats;

pub const WELCOME_TEXT: &str = "Приветик, я ищейка фильмов!\n\
Набери название или то, что ты помнишь о фильме, который надо найти\n\
Я найду его и скину ссылку и описание 👀";

const HELP_INTRO: &str = "Опиши фильм своими словами: сюжет, актёров, цитату. \
Я спрошу языковую модель и пришлю название, описание и ссылку.\n\n\
Бесплатные модели провайдера ограничены по числу запросов в минуту и в день, \
поэтому при частых запросах ответ может прийти с ошибкой: просто повтори позже.";

/// Help text: usage, the provider rate-limit caveat, then the command list.
pub fn help_text() -> String {
    format!("{}\n\n{}", HELP_INTRO, Command::descriptions())
}

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    log: Arc<dyn SearchLog>,
    paginator: HistoryPaginator,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        log: Arc<dyn SearchLog>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            paginator: HistoryPaginator::new(log.clone()),
            log,
            bot_username,
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = {
            let username = self.bot_username.read().await;
            parse_command(&message.content, username.as_deref())
        };
        let Some(command) = command else {
            return Ok(HandlerResponse::Continue);
        };
        info!(user_id = message.user.id, command = ?command, "step: command");

        match command {
            Command::Start => self.reply(message, WELCOME_TEXT.to_string()).await,
            Command::Help => self.reply(message, help_text()).await,
            Command::Stats => {
                let records = self.log.all_for_user(message.user.id).await?;
                self.reply(message, render_stats(&records)).await
            }
            Command::History => {
                let page = self.paginator.render_page(message.user.id, 0).await?;
                let text = page.text();
                self.bot
                    .send_message_with_buttons(&message.chat, &text, &page.buttons())
                    .await?;
                Ok(HandlerResponse::Reply(text))
            }
        }
    }
}
