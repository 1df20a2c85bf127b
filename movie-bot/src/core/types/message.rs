//! Incoming message type for the core model.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single incoming text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}
