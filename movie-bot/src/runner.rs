use anyhow::Result;
use tracing::{info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_dispatcher;

/// Main entry: validate config, init logging, build components, then dispatch until Ctrl-C.
/// The search log pool is closed after the dispatcher stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, model_override: Option<String>) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file(), true)?;

    info!(
        database_url = %config.database_url(),
        model = %config.model(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, model_override.as_deref()).await?;
    let handler_chain = components.handler_chain();
    let callbacks = components.callback_handler();

    info!(model = %components.model, "Bot started successfully");

    let result = run_dispatcher(
        components.teloxide_bot.clone(),
        handler_chain,
        callbacks,
        components.bot_username.clone(),
    )
    .await;

    components.repo.close().await;
    info!("Search log closed");
    result
}
