//! Button press event.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A pressed inline button. `chat` and `message_id` locate the message carrying the button; both
/// are `None` when the transport no longer has that message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub user: User,
    pub chat: Option<Chat>,
    pub message_id: Option<String>,
    pub data: Option<String>,
}
