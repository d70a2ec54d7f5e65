//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use crate::feedback::{FeedbackEntry, FeedbackError};
use crate::lang::Language;
use crate::telegram::{InlineQueryResult, ReplyMarkup, TelegramResult};
use crate::translate::TranslateError;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote text translation
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError>;
}

/// Outbound side of the messaging platform
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text message, returning the new message's id
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> TelegramResult<i64>;

    /// Replace a message's text; any inline keyboard is dropped
    async fn edit_message_text(&self, chat_id: i64, message_id: i64, text: &str) -> TelegramResult<()>;

    /// Stop the button spinner and show a toast
    async fn answer_callback_query(&self, callback_id: &str, text: &str) -> TelegramResult<()>;

    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: &[InlineQueryResult],
    ) -> TelegramResult<()>;
}

/// Durable append-only destination for ratings
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn record(&self, entry: &FeedbackEntry) -> Result<(), FeedbackError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: Translator + ?Sized> Translator for Arc<T> {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        (**self).translate(text, source, target).await
    }
}

#[async_trait]
impl<T: Messenger + ?Sized> Messenger for Arc<T> {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> TelegramResult<i64> {
        (**self).send_message(chat_id, text, markup).await
    }

    async fn edit_message_text(&self, chat_id: i64, message_id: i64, text: &str) -> TelegramResult<()> {
        (**self).edit_message_text(chat_id, message_id, text).await
    }

    async fn answer_callback_query(&self, callback_id: &str, text: &str) -> TelegramResult<()> {
        (**self).answer_callback_query(callback_id, text).await
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: &[InlineQueryResult],
    ) -> TelegramResult<()> {
        (**self).answer_inline_query(query_id, results).await
    }
}

#[async_trait]
impl<T: FeedbackSink + ?Sized> FeedbackSink for Arc<T> {
    async fn record(&self, entry: &FeedbackEntry) -> Result<(), FeedbackError> {
        (**self).record(entry).await
    }
}
