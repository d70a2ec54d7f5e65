//! Process configuration, read once from the environment at startup

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";
pub const DEFAULT_FEEDBACK_PATH: &str = "feedback.jsonl";
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_TRANSLATE_API_BASE: &str = "https://translation.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub bot_token: String,
    pub translate_api_key: String,
    pub port: u16,
    pub webhook_path: String,
    pub webhook_secret: Option<String>,
    /// Public URL to register with `setWebhook`; skipped when unset
    pub webhook_url: Option<String>,
    pub feedback_path: PathBuf,
    pub translate_timeout: Duration,
    pub telegram_api_base: String,
    pub translate_api_base: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let required = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let port = match get("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match get("TRANSLATE_TIMEOUT_SECS") {
            Some(raw) => parse_number("TRANSLATE_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TRANSLATE_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "TRANSLATE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        let webhook_path = get("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        if !webhook_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                var: "WEBHOOK_PATH",
                value: webhook_path,
            });
        }

        Ok(Self {
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            translate_api_key: required("TRANSLATE_API_KEY")?,
            port,
            webhook_path,
            webhook_secret: get("WEBHOOK_SECRET"),
            webhook_url: get("WEBHOOK_URL"),
            feedback_path: get("FEEDBACK_PATH")
                .unwrap_or_else(|| DEFAULT_FEEDBACK_PATH.to_string())
                .into(),
            translate_timeout: Duration::from_secs(timeout_secs),
            telegram_api_base: get("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            translate_api_base: get("TRANSLATE_API_BASE")
                .unwrap_or_else(|| DEFAULT_TRANSLATE_API_BASE.to_string()),
        })
    }
}

fn parse_number<N: std::str::FromStr>(var: &'static str, raw: &str) -> Result<N, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
