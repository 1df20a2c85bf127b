//! Handler traits and transport conversion traits.

use async_trait::async_trait;

use super::{
    callback::CallbackQuery, message::Message, response::HandlerResponse, user::User,
};
use crate::core::error::Result;

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific button press to core [`CallbackQuery`].
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> CallbackQuery;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}

/// Handles inline button presses. Returns false when the payload is not one this handler owns.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    async fn handle_callback(&self, query: &CallbackQuery) -> Result<bool>;
}
