//! Bot API wire types
//!
//! Only the fields the bot reads are declared; everything else in an update
//! is ignored by serde.

use crate::callback::rating_tokens;
use crate::lang::Direction;
use crate::session::RecordId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Inbound
// ============================================================================

/// One webhook delivery
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub inline_query: Option<InlineQuery>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

// ============================================================================
// Outbound
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

/// `reply_markup` parameter of `sendMessage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline {
        inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
    },
    Keyboard {
        keyboard: Vec<Vec<KeyboardButton>>,
        resize_keyboard: bool,
        one_time_keyboard: bool,
    },
    Remove {
        remove_keyboard: bool,
    },
}

impl ReplyMarkup {
    /// One button per translation direction
    pub fn direction_menu() -> Self {
        let rows = [Direction::OROMO_TO_ENGLISH, Direction::ENGLISH_TO_OROMO]
            .into_iter()
            .map(|direction| {
                vec![KeyboardButton {
                    text: direction.label(),
                }]
            })
            .collect();
        ReplyMarkup::Keyboard {
            keyboard: rows,
            resize_keyboard: true,
            one_time_keyboard: true,
        }
    }

    pub fn remove() -> Self {
        ReplyMarkup::Remove {
            remove_keyboard: true,
        }
    }

    /// Good/bad rating buttons for a stored translation
    pub fn rating(direction: Direction, record_id: &RecordId) -> Self {
        let row = rating_tokens(direction, record_id)
            .into_iter()
            .map(|(rating, token)| InlineKeyboardButton {
                text: rating.emoji().to_string(),
                callback_data: token,
            })
            .collect();
        ReplyMarkup::Inline {
            inline_keyboard: vec![row],
        }
    }

    /// Callback tokens carried by an inline keyboard, row by row
    #[cfg(test)]
    pub fn callback_tokens(&self) -> Vec<&str> {
        match self {
            ReplyMarkup::Inline { inline_keyboard } => inline_keyboard
                .iter()
                .flatten()
                .map(|button| button.callback_data.as_str())
                .collect(),
            ReplyMarkup::Keyboard { .. } | ReplyMarkup::Remove { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
}

/// `InlineQueryResultArticle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineQueryResult {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub title: String,
    pub description: String,
    pub input_message_content: InputTextMessageContent,
}

impl InlineQueryResult {
    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        message_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: "article",
            id: id.into(),
            title: title.into(),
            description: description.into(),
            input_message_content: InputTextMessageContent {
                message_text: message_text.into(),
            },
        }
    }
}
