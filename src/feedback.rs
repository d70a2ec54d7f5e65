//! Append-only record of rating events

use crate::callback::Rating;
use crate::lang::Language;
use crate::runtime::FeedbackSink;
use crate::session::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// One rating event, written as one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub user_id: UserId,
    pub username: Option<String>,
    pub rating: Rating,
    pub source_lang: Language,
    pub target_lang: Language,
    pub original_text: String,
    pub translated_text: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("feedback encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Appends entries as JSON lines to a file
pub struct JsonlFeedbackSink {
    path: PathBuf,
    /// Serializes appends so concurrent ratings never interleave mid-line
    write_lock: Mutex<()>,
}

impl JsonlFeedbackSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedbackSink for JsonlFeedbackSink {
    async fn record(&self, entry: &FeedbackEntry) -> Result<(), FeedbackError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}
