//! Base config: Telegram Bot connection, logging, search log database. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// SQLite file holding the search log.
pub const DEFAULT_DATABASE_URL: &str = "movie_bot.sqlite";
pub const DEFAULT_LOG_FILE: &str = "logs/movie-bot.log";

/// Base config: Telegram-related, logging, database only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// DATABASE_URL: a plain SQLite path or a `sqlite:` URL
    pub database_url: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) if t.trim().is_empty() => anyhow::bail!("--token is empty"),
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .context("BOT_TOKEN not set")?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: Self::log_file_from_env(),
            database_url,
        })
    }

    /// LOG_FILE or the default; also used by CLI commands that do not need a bot token.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
