//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use llm_client::{select_model, LlmClient, LlmConfig, OpenAILlmClient};
use openai_client::mask_token;
use std::sync::Arc;
use storage::{SearchLog, SearchRepository};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};
use web_search::{DuckDuckGoSearcher, LinkSearcher};

use crate::chain::HandlerChain;
use crate::config::{AppExtensions, BaseAppExtensions, BotConfig};
use crate::core::{Bot, CallbackHandler};
use crate::handlers::{CommandHandler, HistoryCallbackHandler, LoggingHandler, MovieSearchHandler};
use crate::history::HistoryPaginator;
use crate::resolver::MovieResolver;
use crate::telegram::TelegramBotAdapter;

/// Shared clients for run_bot; produced by the component factory.
pub struct BotComponents {
    pub repo: Arc<SearchRepository>,
    pub teloxide_bot: teloxide::Bot,
    pub bot_adapter: Arc<dyn Bot>,
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub resolver: Arc<MovieResolver>,
    /// Model used for every search while the bot runs.
    pub model: String,
}

impl BotComponents {
    pub fn handler_chain(&self) -> HandlerChain {
        build_handler_chain(
            self.bot_adapter.clone(),
            self.repo.clone(),
            self.resolver.clone(),
            &self.model,
            self.bot_username.clone(),
        )
    }

    pub fn callback_handler(&self) -> Arc<dyn CallbackHandler> {
        build_callback_handler(self.bot_adapter.clone(), self.repo.clone())
    }
}

/// teloxide Bot with the optional custom API URL applied.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

pub fn build_llm_client(config: &dyn LlmConfig) -> Arc<dyn LlmClient> {
    info!(
        base_url = %config.base_url(),
        api_key = %mask_token(config.api_key()),
        max_tokens = config.max_tokens(),
        "LLM client"
    );
    Arc::new(
        OpenAILlmClient::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_max_tokens(config.max_tokens()),
    )
}

/// Resolver over the configured LLM provider and DuckDuckGo.
pub fn build_resolver(extensions: &BaseAppExtensions) -> Result<Arc<MovieResolver>> {
    let llm = build_llm_client(extensions.llm_config());
    let links: Arc<dyn LinkSearcher> =
        Arc::new(DuckDuckGoSearcher::new(extensions.search_config())?);
    Ok(Arc::new(
        MovieResolver::new(llm, links)
            .with_system_prompt_opt(extensions.llm_config().system_prompt().map(str::to_string)),
    ))
}

/// Configured model, or `requested` when the provider catalog lists it.
pub async fn resolve_model(
    llm: &dyn LlmClient,
    configured: &str,
    requested: Option<&str>,
) -> String {
    match requested {
        Some(requested) if requested != configured => {
            select_model(llm, configured, requested).await
        }
        _ => configured.to_string(),
    }
}

/// Builds all shared clients. `model_override` comes from `run --model`.
#[instrument(skip(config))]
pub async fn build_bot_components(
    config: &BotConfig,
    model_override: Option<&str>,
) -> Result<BotComponents> {
    let repo = Arc::new(
        SearchRepository::new(config.database_url())
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    database_url = %config.database_url(),
                    "Failed to initialize search log"
                );
                anyhow::anyhow!("Failed to initialize search log: {}", e)
            })?,
    );

    let teloxide_bot = build_teloxide_bot(config);
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let resolver = build_resolver(config.extensions())?;
    let model = resolve_model(resolver.llm().as_ref(), config.model(), model_override).await;
    info!(model = %model, "Model selected");

    Ok(BotComponents {
        repo,
        teloxide_bot,
        bot_adapter,
        bot_username: Arc::new(RwLock::new(None)),
        resolver,
        model,
    })
}

/// Builds the handler chain (logging → commands → movie search).
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    log: Arc<dyn SearchLog>,
    resolver: Arc<MovieResolver>,
    model: &str,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            bot.clone(),
            log.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(MovieSearchHandler::new(
            bot,
            resolver,
            log,
            model.to_string(),
        )))
}

/// Builds the handler for history navigation buttons.
pub fn build_callback_handler(bot: Arc<dyn Bot>, log: Arc<dyn SearchLog>) -> Arc<dyn CallbackHandler> {
    Arc::new(HistoryCallbackHandler::new(bot, HistoryPaginator::new(log)))
}
