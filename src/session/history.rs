//! Bounded per-user translation history

use crate::lang::Direction;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Number of translations kept per user
pub const HISTORY_CAPACITY: usize = 5;

/// One completed translation, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub direction: Direction,
    pub original_text: String,
    pub translated_text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        direction: Direction,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Oldest-first log of recent translations, capped at [`HISTORY_CAPACITY`]
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push to the back, then drop from the front until the cap holds
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first, newest last
    pub fn list(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
