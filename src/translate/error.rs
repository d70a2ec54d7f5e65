//! Translation error types

use thiserror::Error;

/// Translation failure with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TranslateError {
    pub kind: TranslateErrorKind,
    pub message: String,
}

impl TranslateError {
    pub fn new(kind: TranslateErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::Timeout, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::Auth, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::ServerError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(TranslateErrorKind::InvalidResponse, message)
    }
}

/// Error classification, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateErrorKind {
    /// Connection problems
    Network,
    /// The call exceeded the configured bound
    Timeout,
    /// Key rejected (401, 403)
    Auth,
    /// Quota exhausted (429)
    RateLimit,
    /// 5xx from the service
    ServerError,
    /// Unexpected status or body
    InvalidResponse,
}

impl TranslateErrorKind {
    /// Whether the same request might succeed later. No retry happens here;
    /// the flag only goes into logs.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Self::Network | Self::Timeout | Self::RateLimit | Self::ServerError
        )
    }
}
