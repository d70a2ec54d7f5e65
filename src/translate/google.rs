//! Google Cloud Translation (v2 REST) client

use super::TranslateError;
use crate::lang::Language;
use crate::runtime::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct GoogleTranslator {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(api_key: String, api_base: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!(
                "{}/language/translate/v2",
                api_base.trim_end_matches('/')
            ),
        })
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> TranslateError {
        match status.as_u16() {
            401 | 403 => TranslateError::auth(format!("Authentication failed: {body}")),
            429 => TranslateError::rate_limit(format!("Rate limited: {body}")),
            500..=599 => TranslateError::server_error(format!("Server error: {body}")),
            _ => TranslateError::invalid_response(format!("HTTP {status}: {body}")),
        }
    }

    fn extract(body: &str) -> Result<String, TranslateError> {
        let parsed: GoogleResponse = serde_json::from_str(body).map_err(|e| {
            TranslateError::invalid_response(format!("Failed to parse response: {e}"))
        })?;
        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| TranslateError::invalid_response("Response carried no translation"))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let request = GoogleRequest {
            q: text,
            source: source.code(),
            target: target.code(),
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // Drop the URL so the key never reaches the logs
                let e = e.without_url();
                if e.is_timeout() {
                    TranslateError::timeout(format!("Request timeout: {e}"))
                } else {
                    TranslateError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::network(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }
        Self::extract(&body)
    }
}

// Google API types

#[derive(Debug, Serialize)]
struct GoogleRequest<'a> {
    q: &'a str,
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    data: GoogleData,
}

#[derive(Debug, Deserialize)]
struct GoogleData {
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
}
