//! Bot API client over reqwest

use super::{InlineQueryResult, ReplyMarkup, TelegramError, TelegramResult};
use crate::runtime::Messenger;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

pub struct TelegramClient {
    http: Client,
    /// `<api base>/bot<token>`
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: &str, api_base: &str) -> TelegramResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TelegramError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{token}", api_base.trim_end_matches('/')),
        })
    }

    /// Point Telegram at our webhook; called once at startup
    pub async fn set_webhook(&self, url: &str, secret: Option<&str>) -> TelegramResult<()> {
        let mut body = json!({
            "url": url,
            "allowed_updates": ["message", "inline_query", "callback_query"],
        });
        if let Some(secret) = secret {
            body["secret_token"] = json!(secret);
        }
        self.call::<bool>("setWebhook", &body).await.map(|_| ())
    }

    async fn call<T: DeserializeOwned>(&self, method: &'static str, body: &Value) -> TelegramResult<T> {
        let response = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .json(body)
            .send()
            .await
            // reqwest errors embed the URL, and with it the token
            .map_err(|e| TelegramError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TelegramError::Network(e.without_url().to_string()))?;

        let parsed: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| TelegramError::Decode {
            method,
            reason: format!("{e} (HTTP {status})"),
        })?;

        if !parsed.ok {
            return Err(TelegramError::Api {
                method,
                description: parsed
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            });
        }
        parsed.result.ok_or(TelegramError::Decode {
            method,
            reason: "missing result".to_string(),
        })
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> TelegramResult<i64> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });
        if let Some(markup) = markup {
            body["reply_markup"] = json!(markup);
        }
        let sent: SentMessage = self.call("sendMessage", &body).await?;
        Ok(sent.message_id)
    }

    async fn edit_message_text(&self, chat_id: i64, message_id: i64, text: &str) -> TelegramResult<()> {
        let body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        // Answers with the edited Message, which we do not need
        self.call::<Value>("editMessageText", &body).await.map(|_| ())
    }

    async fn answer_callback_query(&self, callback_id: &str, text: &str) -> TelegramResult<()> {
        let body = json!({
            "callback_query_id": callback_id,
            "text": text,
        });
        self.call::<bool>("answerCallbackQuery", &body).await.map(|_| ())
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: &[InlineQueryResult],
    ) -> TelegramResult<()> {
        let body = json!({
            "inline_query_id": query_id,
            "results": results,
            "cache_time": 0,
        });
        self.call::<bool>("answerInlineQuery", &body).await.map(|_| ())
    }
}
