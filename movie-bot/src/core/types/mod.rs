//! Core types: user, chat, message, callback query, inline button, handler response, and the
//! handler traits.

mod button;
mod callback;
mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use button::InlineButton;
pub use callback::CallbackQuery;
pub use chat::Chat;
pub use handler::{CallbackHandler, Handler, ToCoreCallback, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
