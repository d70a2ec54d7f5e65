//! Bounded per-user store of translation records referenced by rating buttons

use crate::lang::Direction;
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Number of records kept per user before the oldest is evicted
pub const RECORD_CAPACITY: usize = 100;

const RECORD_ID_LEN: usize = 32;

/// Opaque record identifier: the simple (hex) form of a v4 UUID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Accept only ids of the shape [`RecordId::generate`] produces
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == RECORD_ID_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub id: RecordId,
    pub original_text: String,
    pub translated_text: String,
    pub direction: Direction,
}

/// Map from record id to record with strict insertion-order eviction.
///
/// Lookups never refresh a record's position.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<RecordId, TranslationRecord>,
    order: VecDeque<RecordId>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record under a freshly generated id
    pub fn put(
        &mut self,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
        direction: Direction,
    ) -> RecordId {
        let id = RecordId::generate();
        let record = TranslationRecord {
            id: id.clone(),
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            direction,
        };
        self.records.insert(id.clone(), record);
        self.order.push_back(id.clone());

        while self.order.len() > RECORD_CAPACITY {
            if let Some(evicted) = self.order.pop_front() {
                self.records.remove(&evicted);
                tracing::debug!(record_id = %evicted, "Evicted translation record");
            }
        }
        id
    }

    pub fn get(&self, id: &RecordId) -> Option<&TranslationRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
