//! Bot configuration: BaseConfig (Telegram + log + DB) + AppExtensions (LLM, web search).

mod base;
mod bot_config;
mod extensions;


pub use base::{BaseConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use extensions::{AppExtensions, BaseAppExtensions};
