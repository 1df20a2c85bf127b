//! Core types and traits: Handler, CallbackHandler, Bot, Message, CallbackQuery, error, logger.
//! Transport-agnostic; the telegram module adapts teloxide to these.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackHandler, CallbackQuery, Chat, Handler, HandlerResponse, InlineButton, Message,
    ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};
