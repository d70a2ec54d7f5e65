//! Text translation collaborators
//!
//! The runtime only sees the [`Translator`] trait; this module provides the
//! Google Cloud Translation client and a logging decorator.

mod error;
mod google;

pub use error::{TranslateError, TranslateErrorKind};
pub use google::GoogleTranslator;

use crate::lang::Language;
use crate::runtime::Translator;
use async_trait::async_trait;

/// Logging wrapper for translators
pub struct LoggingTranslator<T> {
    inner: T,
}

impl<T: Translator> LoggingTranslator<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: Translator> Translator for LoggingTranslator<T> {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let start = std::time::Instant::now();
        let result = self.inner.translate(text, source, target).await;
        let duration = start.elapsed();

        match &result {
            Ok(translated) => {
                tracing::info!(
                    %source,
                    %target,
                    duration_ms = %duration.as_millis(),
                    input_chars = text.chars().count(),
                    output_chars = translated.chars().count(),
                    "Translation completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    %source,
                    %target,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    transient = e.kind.is_transient(),
                    "Translation failed"
                );
            }
        }

        result
    }
}
