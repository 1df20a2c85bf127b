//! Adapters from Telegram (teloxide) types to core types.

use teloxide::types::MaybeInaccessibleMessage;

use crate::core::{
    CallbackQuery, Chat, Message, ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat { id: chat.id.0 }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Messages without a sender (channel posts) map to user id 0.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                }),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`CallbackQuery`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallback for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        let (chat, message_id) = match &self.0.message {
            Some(MaybeInaccessibleMessage::Regular(m)) => {
                (Some(core_chat(&m.chat)), Some(m.id.to_string()))
            }
            Some(MaybeInaccessibleMessage::Inaccessible(m)) => (Some(core_chat(&m.chat)), None),
            None => (None, None),
        };
        CallbackQuery {
            user: TelegramUserWrapper(&self.0.from).to_core(),
            chat,
            message_id,
            data: self.0.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with its id and username.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = user();
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
    }

    fn callback(message: Option<serde_json::Value>) -> teloxide::types::CallbackQuery {
        let mut value = json!({
            "id": "4382bfdwdsb323b2d9",
            "from": { "id": 123, "is_bot": false, "first_name": "Test", "username": "testuser" },
            "chat_instance": "-1421591226491186",
            "data": "history_page:1"
        });
        if let Some(m) = message {
            value["message"] = m;
        }
        serde_json::from_value(value).unwrap()
    }

    /// **Test: a press on an accessible message carries its chat and message id.**
    #[test]
    fn test_callback_wrapper_regular_message() {
        let query = callback(Some(json!({
            "message_id": 77,
            "date": 1700000000,
            "chat": { "id": 123, "type": "private", "first_name": "Test" },
            "text": "📜 История поисков:"
        })));

        let core = TelegramCallbackWrapper(&query).to_core();

        assert_eq!(core.user.id, 123);
        assert_eq!(core.chat.as_ref().map(|c| c.id), Some(123));
        assert_eq!(core.message_id.as_deref(), Some("77"));
        assert_eq!(core.data.as_deref(), Some("history_page:1"));
    }

    /// **Test: an inaccessible message (date 0) keeps the chat but has no message id.**
    #[test]
    fn test_callback_wrapper_inaccessible_message() {
        let query = callback(Some(json!({
            "message_id": 77,
            "date": 0,
            "chat": { "id": 123, "type": "private", "first_name": "Test" }
        })));

        let core = TelegramCallbackWrapper(&query).to_core();

        assert_eq!(core.chat.as_ref().map(|c| c.id), Some(123));
        assert!(core.message_id.is_none());
    }

    /// **Test: a press without a message keeps sender and payload only.**
    #[test]
    fn test_callback_wrapper_without_message() {
        let core = TelegramCallbackWrapper(&callback(None)).to_core();

        assert_eq!(core.user.id, 123);
        assert!(core.chat.is_none());
        assert!(core.message_id.is_none());
        assert_eq!(core.data.as_deref(), Some("history_page:1"));
    }
}
