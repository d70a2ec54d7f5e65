//! Event handling: session locking, transitions, and effect execution

use super::traits::{FeedbackSink, Messenger, Translator};
use crate::callback::CallbackToken;
use crate::dispatch::{
    EventHandler, InboundEvent, IncomingCallback, IncomingInlineQuery, IncomingMessage,
};
use crate::feedback::FeedbackEntry;
use crate::lang::Direction;
use crate::messages;
use crate::session::{HistoryEntry, SessionManager, UserSession};
use crate::state_machine::{transition, Effect, Input};
use crate::telegram::{InlineQueryResult, ReplyMarkup};
use crate::translate::TranslateError;
use async_trait::async_trait;
use std::time::Duration;

/// Generic bot runtime that can work with any translator, messenger, and
/// feedback sink implementations
pub struct BotRuntime<T, M, F>
where
    T: Translator,
    M: Messenger,
    F: FeedbackSink,
{
    sessions: SessionManager,
    translator: T,
    messenger: M,
    feedback: F,
    translate_timeout: Duration,
}

impl<T, M, F> BotRuntime<T, M, F>
where
    T: Translator,
    M: Messenger,
    F: FeedbackSink,
{
    pub fn new(translator: T, messenger: M, feedback: F, translate_timeout: Duration) -> Self {
        Self {
            sessions: SessionManager::new(),
            translator,
            messenger,
            feedback,
            translate_timeout,
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Text messages drive the state machine. The session guard is held
    /// until every effect, translation included, has run.
    pub async fn handle_message(&self, message: IncomingMessage) {
        let user_id = message.sender.id;
        let session = self.sessions.session(user_id).await;
        let mut session = session.lock().await;

        let input = Input::classify(&message.text);
        let result = transition(&session.state, session.pending_direction(), input);

        tracing::info!(
            user_id,
            from = %session.state,
            to = %result.new_state,
            effects = result.effects.len(),
            "State transition"
        );

        session.state = result.new_state;
        session.set_pending(result.pending);

        for effect in result.effects {
            self.execute_effect(&mut session, message.chat_id, effect)
                .await;
        }
    }

    async fn execute_effect(&self, session: &mut UserSession, chat_id: i64, effect: Effect) {
        match effect {
            Effect::Reply { text, markup } => {
                self.deliver(chat_id, &text, markup.as_ref()).await;
            }
            Effect::Translate {
                text,
                direction,
                tutorial,
            } => {
                self.run_translation(session, chat_id, &text, direction, tutorial)
                    .await;
            }
            Effect::ShowHistory => {
                let text = messages::history(session.history.list());
                self.deliver(chat_id, &text, None).await;
            }
            Effect::ClearHistory => session.history.clear(),
        }
    }

    /// The session is already back at the menu when this runs, so a failed
    /// or timed-out call leaves nothing half-applied.
    async fn run_translation(
        &self,
        session: &mut UserSession,
        chat_id: i64,
        text: &str,
        direction: Direction,
        tutorial: bool,
    ) {
        let translated = match self.translate(text, direction).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    chat_id,
                    %direction,
                    kind = ?e.kind,
                    error = %e,
                    "Translation failed, returning to menu"
                );
                self.deliver(
                    chat_id,
                    messages::TRANSLATION_FAILED,
                    Some(&ReplyMarkup::direction_menu()),
                )
                .await;
                return;
            }
        };

        session
            .history
            .append(HistoryEntry::new(direction, text, translated.as_str()));
        let record_id = session.records.put(text, translated.as_str(), direction);
        tracing::debug!(chat_id, %record_id, records = session.records.len(), "Stored translation record");

        let body = messages::translation_result(direction, text, &translated);
        self.deliver(chat_id, &body, Some(&ReplyMarkup::rating(direction, &record_id)))
            .await;
        if tutorial {
            self.deliver(chat_id, messages::TUTORIAL_FOLLOW_UP, None)
                .await;
        }
        self.deliver(
            chat_id,
            messages::NEXT_PROMPT,
            Some(&ReplyMarkup::direction_menu()),
        )
        .await;
    }

    /// Call the translator under the configured time bound
    async fn translate(&self, text: &str, direction: Direction) -> Result<String, TranslateError> {
        let call = self
            .translator
            .translate(text, direction.source, direction.target);
        match tokio::time::timeout(self.translate_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(TranslateError::timeout(format!(
                "No response within {}ms",
                self.translate_timeout.as_millis()
            ))),
        }
    }

    /// Inline queries translate without touching any session
    pub async fn handle_inline_query(&self, query: IncomingInlineQuery) {
        let results = self.inline_results(query.query.trim()).await;
        if let Err(e) = self
            .messenger
            .answer_inline_query(&query.query_id, &results)
            .await
        {
            tracing::warn!(query_id = %query.query_id, error = %e, "Failed to answer inline query");
        }
    }

    async fn inline_results(&self, query: &str) -> Vec<InlineQueryResult> {
        if query.is_empty() {
            return Vec::new();
        }
        let (directions, text) = match Direction::split_prefix(query) {
            Some((_, "")) => return Vec::new(),
            Some((direction, rest)) => (vec![direction], rest),
            None => (
                vec![Direction::OROMO_TO_ENGLISH, Direction::ENGLISH_TO_OROMO],
                query,
            ),
        };

        let attempts = futures::future::join_all(directions.into_iter().map(|direction| async move {
            (direction, self.translate(text, direction).await)
        }))
        .await;

        attempts
            .into_iter()
            .filter_map(|(direction, result)| match result {
                Ok(translated) => Some(InlineQueryResult::article(
                    format!("{}-{}", direction.source, direction.target),
                    direction.label(),
                    translated.clone(),
                    messages::translation_result(direction, text, &translated),
                )),
                Err(e) => {
                    tracing::warn!(%direction, error = %e, "Inline translation failed");
                    None
                }
            })
            .collect()
    }

    /// Rating button presses. Never mutates the session.
    pub async fn handle_callback(&self, callback: IncomingCallback) {
        let user_id = callback.sender.id;

        let token = match CallbackToken::decode(&callback.data) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(user_id, data = %callback.data, error = %e, "Rejected callback");
                self.toast(&callback.callback_id, messages::MALFORMED_TOKEN)
                    .await;
                return;
            }
        };

        let record = match self.sessions.get(user_id).await {
            Some(session) => {
                let guard = session.lock().await;
                guard.records.get(&token.record_id).cloned()
            }
            None => None,
        };
        let Some(record) = record else {
            tracing::info!(user_id, record_id = %token.record_id, "Rated record not found");
            self.toast(&callback.callback_id, messages::RECORD_NOT_FOUND)
                .await;
            return;
        };
        if record.direction != token.direction {
            tracing::warn!(user_id, record_id = %token.record_id, "Callback direction does not match record");
            self.toast(&callback.callback_id, messages::MALFORMED_TOKEN)
                .await;
            return;
        }

        let entry = FeedbackEntry {
            user_id,
            username: callback.sender.username.clone(),
            rating: token.rating,
            source_lang: record.direction.source,
            target_lang: record.direction.target,
            original_text: record.original_text.clone(),
            translated_text: record.translated_text.clone(),
            recorded_at: chrono::Utc::now(),
        };
        match self.feedback.record(&entry).await {
            Ok(()) => tracing::info!(user_id, rating = ?token.rating, "Feedback recorded"),
            Err(e) => tracing::error!(user_id, error = %e, "Failed to record feedback"),
        }

        self.toast(&callback.callback_id, messages::RATING_THANKS)
            .await;

        if let Some(message) = callback.message {
            let result =
                messages::translation_result(record.direction, &record.original_text, &record.translated_text);
            let text = messages::rated(&result, token.rating);
            if let Err(e) = self
                .messenger
                .edit_message_text(message.chat_id, message.message_id, &text)
                .await
            {
                tracing::warn!(user_id, error = %e, "Failed to edit rated message");
            }
        }
    }

    /// Fire-and-forget send; failures are logged
    async fn deliver(&self, chat_id: i64, text: &str, markup: Option<&ReplyMarkup>) {
        if let Err(e) = self.messenger.send_message(chat_id, text, markup).await {
            tracing::warn!(chat_id, error = %e, "Failed to send message");
        }
    }

    async fn toast(&self, callback_id: &str, text: &str) {
        if let Err(e) = self.messenger.answer_callback_query(callback_id, text).await {
            tracing::warn!(callback_id, error = %e, "Failed to answer callback query");
        }
    }
}

#[async_trait]
impl<T, M, F> EventHandler for BotRuntime<T, M, F>
where
    T: Translator,
    M: Messenger,
    F: FeedbackSink,
{
    async fn handle(&self, event: InboundEvent) {
        match event {
            InboundEvent::Message(message) => self.handle_message(message).await,
            InboundEvent::InlineQuery(query) => self.handle_inline_query(query).await,
            InboundEvent::Callback(callback) => self.handle_callback(callback).await,
        }
    }
}
