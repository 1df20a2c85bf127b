//! Dispatcher runner: text messages go through the HandlerChain, button presses to the
//! CallbackHandler. Updates of one chat are handled in order; different chats run concurrently.

use crate::chain::HandlerChain;
use crate::core::{CallbackHandler, ToCoreCallback, ToCoreMessage};
use crate::handlers::Command;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if msg.text().is_none() {
        debug!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Ignoring non-text message"
        );
        return Ok(());
    }

    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    callbacks: Arc<dyn CallbackHandler>,
) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "Failed to acknowledge button press");
    }

    let query = TelegramCallbackWrapper(&q).to_core();
    match callbacks.handle_callback(&query).await {
        Ok(true) => {}
        Ok(false) => debug!(user_id = query.user.id, data = ?query.data, "Unhandled button press"),
        Err(e) => error!(error = %e, user_id = query.user.id, "Callback handler failed"),
    }
    Ok(())
}

/// Starts the dispatcher and blocks until it stops (Ctrl-C).
///
/// Before dispatching, get_me() fills `bot_username` so `/cmd@botname` parses, and the command
/// list is registered as the bot's menu. Neither failure is fatal.
#[instrument(skip(bot, handler_chain, callbacks, bot_username))]
pub async fn run_dispatcher(
    bot: Bot,
    handler_chain: HandlerChain,
    callbacks: Arc<dyn CallbackHandler>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands with @mention will not parse"),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command menu");
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Dispatcher started");
    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain, callbacks])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Dispatcher stopped");

    Ok(())
}
