//! # Movie finder bot
//!
//! Users describe a film from memory; the bot asks a language model for the title and a short
//! description, searches the web for a viewing link, and logs each search for `/history` and
//! `/stats`.
//!
//! Core (Handler, CallbackHandler, Bot, Message), chain (HandlerChain), and telegram
//! (run_dispatcher, adapters) are transport-agnostic layers; resolver, history and stats hold the
//! domain logic.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod history;
pub mod resolver;
pub mod runner;
pub mod stats;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, parse_message_id, Bot, CallbackHandler, CallbackQuery, Chat, DbotError, Handler,
    HandlerError, HandlerResponse, InlineButton, Message, Result, ToCoreCallback, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper, TelegramMessageWrapper,
    TelegramUserWrapper,
};

pub use config::{AppExtensions, BaseAppExtensions, BaseConfig, BotConfig};
pub use runner::run_bot;

pub use components::{
    build_bot_components, build_callback_handler, build_handler_chain, build_resolver,
    BotComponents,
};
pub use handlers::{
    CommandHandler, HistoryCallbackHandler, LoggingHandler, MovieSearchHandler,
};
pub use history::{HistoryPage, HistoryPaginator};
pub use resolver::{MovieInfo, MovieResolver, Resolution};
