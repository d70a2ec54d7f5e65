//! Classification of inbound updates into the three event kinds the bot
//! handles

use crate::session::UserId;
use crate::telegram::{Update, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Who sent an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub username: Option<String>,
}

impl From<User> for Sender {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub sender: Sender,
    pub chat_id: i64,
    /// Empty for messages without text (stickers, photos)
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingInlineQuery {
    pub sender: Sender,
    pub query_id: String,
    pub query: String,
}

/// The message a rating button was attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCallback {
    pub sender: Sender,
    pub callback_id: String,
    pub data: String,
    /// Absent when the originating message is too old or inline
    pub message: Option<MessageRef>,
}

/// A classified webhook event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Message(IncomingMessage),
    InlineQuery(IncomingInlineQuery),
    Callback(IncomingCallback),
}

impl InboundEvent {
    pub fn sender(&self) -> &Sender {
        match self {
            InboundEvent::Message(m) => &m.sender,
            InboundEvent::InlineQuery(q) => &q.sender,
            InboundEvent::Callback(c) => &c.sender,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Message(_) => "message",
            InboundEvent::InlineQuery(_) => "inline_query",
            InboundEvent::Callback(_) => "callback_query",
        }
    }
}

/// Why an update could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("update {0} carries no message, inline query, or callback query")]
    Unsupported(i64),
    #[error("update {0} has no sender")]
    MissingSender(i64),
}

pub fn classify(update: Update) -> Result<InboundEvent, EnvelopeError> {
    let update_id = update.update_id;

    if let Some(message) = update.message {
        let sender = message
            .from
            .ok_or(EnvelopeError::MissingSender(update_id))?;
        return Ok(InboundEvent::Message(IncomingMessage {
            sender: sender.into(),
            chat_id: message.chat.id,
            text: message.text.unwrap_or_default(),
        }));
    }

    if let Some(query) = update.inline_query {
        return Ok(InboundEvent::InlineQuery(IncomingInlineQuery {
            sender: query.from.into(),
            query_id: query.id,
            query: query.query,
        }));
    }

    if let Some(callback) = update.callback_query {
        return Ok(InboundEvent::Callback(IncomingCallback {
            sender: callback.from.into(),
            callback_id: callback.id,
            data: callback.data.unwrap_or_default(),
            message: callback.message.map(|m| MessageRef {
                chat_id: m.chat.id,
                message_id: m.message_id,
            }),
        }));
    }

    Err(EnvelopeError::Unsupported(update_id))
}

/// Receives classified events. Implementations own all error reporting;
/// nothing is returned to the ingress.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: InboundEvent);
}

#[async_trait]
impl<T: EventHandler + ?Sized> EventHandler for Arc<T> {
    async fn handle(&self, event: InboundEvent) {
        (**self).handle(event).await;
    }
}
