//! Rating button callback tokens
//!
//! A token is `r|<rating>|<source>|<target>|<record id>`. It carries only a
//! reference to the record, never the texts themselves, so it stays well
//! under Telegram's 64-byte `callback_data` ceiling.

use crate::lang::{Direction, Language};
use crate::session::RecordId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Telegram rejects `callback_data` longer than this many bytes
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

const PREFIX: &str = "r";
const DELIMITER: &str = "|";
const FIELD_COUNT: usize = 5;

/// The verdict a user attaches to a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Good,
    Bad,
}

impl Rating {
    pub const ALL: [Rating; 2] = [Rating::Good, Rating::Bad];

    pub fn tag(self) -> &'static str {
        match self {
            Rating::Good => "g",
            Rating::Bad => "b",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rating| rating.tag() == tag)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Good => "👍",
            Rating::Bad => "👎",
        }
    }
}

/// Decoded contents of a rating button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackToken {
    pub rating: Rating,
    pub direction: Direction,
    pub record_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed callback token: {0}")]
    Malformed(&'static str),
}

impl CallbackToken {
    pub fn new(rating: Rating, direction: Direction, record_id: RecordId) -> Self {
        Self {
            rating,
            direction,
            record_id,
        }
    }

    pub fn encode(&self) -> String {
        [
            PREFIX,
            self.rating.tag(),
            self.direction.source.code(),
            self.direction.target.code(),
            self.record_id.as_str(),
        ]
        .join(DELIMITER)
    }

    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let fields: Vec<&str> = token.split(DELIMITER).collect();
        let [prefix, tag, source, target, record_id] = fields.as_slice() else {
            return Err(TokenError::Malformed("wrong field count"));
        };
        debug_assert_eq!(fields.len(), FIELD_COUNT);

        if *prefix != PREFIX {
            return Err(TokenError::Malformed("unknown prefix"));
        }
        let rating = Rating::from_tag(tag).ok_or(TokenError::Malformed("unknown rating"))?;
        let source =
            Language::from_code(source).map_err(|_| TokenError::Malformed("unknown language"))?;
        let target =
            Language::from_code(target).map_err(|_| TokenError::Malformed("unknown language"))?;
        let direction = Direction::new(source, target)
            .map_err(|_| TokenError::Malformed("source equals target"))?;
        let record_id = RecordId::parse(record_id).ok_or(TokenError::Malformed("bad record id"))?;

        Ok(Self::new(rating, direction, record_id))
    }
}

/// Tokens for both rating buttons of one translation, good first
pub fn rating_tokens(direction: Direction, record_id: &RecordId) -> [(Rating, String); 2] {
    Rating::ALL.map(|rating| {
        let token = CallbackToken::new(rating, direction, record_id.clone()).encode();
        (rating, token)
    })
}
