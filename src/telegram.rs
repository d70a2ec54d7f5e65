//! Telegram Bot API surface: inbound update envelopes, reply markup, and
//! the HTTP client used to talk back to the platform

mod client;
mod types;

pub use client::TelegramClient;
pub use types::*;

use thiserror::Error;

/// Longest text `sendMessage` and `editMessageText` accept
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Result type alias for Bot API calls.
pub type TelegramResult<T> = std::result::Result<T, TelegramError>;

/// Errors from calling the Bot API. Logged by callers, never retried.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The request never got a response (connect, timeout, TLS).
    #[error("telegram request failed: {0}")]
    Network(String),

    /// The Bot API answered with `ok: false` or a non-success status.
    #[error("telegram {method} failed: {description}")]
    Api {
        method: &'static str,
        description: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected telegram response from {method}: {reason}")]
    Decode {
        method: &'static str,
        reason: String,
    },
}
