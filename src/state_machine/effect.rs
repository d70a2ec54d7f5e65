//! Effects produced by state transitions

use crate::lang::Direction;
use crate::telegram::ReplyMarkup;

/// Effects to be executed, in order, after the new state is applied
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a message to the user's chat
    Reply {
        text: String,
        markup: Option<ReplyMarkup>,
    },

    /// Translate, then store the record, append to history, and reply with
    /// rating buttons. The tutorial variant adds one follow-up message.
    Translate {
        text: String,
        direction: Direction,
        tutorial: bool,
    },

    /// Send the user's history
    ShowHistory,

    /// Drop all history entries
    ClearHistory,
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply {
            text: text.into(),
            markup: None,
        }
    }

    /// Reply and show the direction menu keyboard
    pub fn reply_with_menu(text: impl Into<String>) -> Self {
        Effect::Reply {
            text: text.into(),
            markup: Some(ReplyMarkup::direction_menu()),
        }
    }

    /// Reply and hide any custom keyboard
    pub fn reply_hiding_menu(text: impl Into<String>) -> Self {
        Effect::Reply {
            text: text.into(),
            markup: Some(ReplyMarkup::remove()),
        }
    }
}
