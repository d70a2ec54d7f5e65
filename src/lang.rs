//! Supported languages and translation directions

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The two languages the bot translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "om")]
    Oromo,
    #[serde(rename = "en")]
    English,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Oromo, Language::English];

    /// ISO 639-1 code, also used on the wire in callback tokens
    pub fn code(self) -> &'static str {
        match self {
            Language::Oromo => "om",
            Language::English => "en",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Oromo => "Afaan Oromo",
            Language::English => "English",
        }
    }

    /// Exact code lookup, as used by the callback codec
    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }

    /// Lenient lookup for user input: codes and names, any case
    pub fn parse(input: &str) -> Result<Self, LanguageError> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "om" | "or" | "oromo" | "afaan oromo" | "oromoo" | "afaan oromoo" => Ok(Language::Oromo),
            "en" | "english" => Ok(Language::English),
            _ => Err(LanguageError::Unsupported(input.trim().to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Why a piece of text is not a usable direction choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("not a direction")]
    NotADirection,
    #[error(transparent)]
    Unsupported(#[from] LanguageError),
    #[error("source and target are the same language")]
    SameLanguage,
}

/// A source/target language pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub source: Language,
    pub target: Language,
}

const ARROWS: [&str; 3] = ["→", "->", ">"];

impl Direction {
    pub const OROMO_TO_ENGLISH: Direction = Direction {
        source: Language::Oromo,
        target: Language::English,
    };
    pub const ENGLISH_TO_OROMO: Direction = Direction {
        source: Language::English,
        target: Language::Oromo,
    };

    pub fn new(source: Language, target: Language) -> Result<Self, DirectionError> {
        if source == target {
            return Err(DirectionError::SameLanguage);
        }
        Ok(Self { source, target })
    }

    /// Label shown on the menu keyboard button for this direction
    pub fn label(self) -> String {
        format!("{} → {}", self.source.name(), self.target.name())
    }

    /// Parse a direction choice typed by the user or sent by a menu button.
    ///
    /// Accepts the menu labels and `<lang> <arrow> <lang>` with any of the
    /// arrows `→`, `->`, `>`.
    pub fn parse(input: &str) -> Result<Self, DirectionError> {
        let input = input.trim();
        let Some((source, target)) = ARROWS.iter().find_map(|arrow| input.split_once(arrow))
        else {
            return Err(DirectionError::NotADirection);
        };
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return Err(DirectionError::NotADirection);
        }
        Self::new(Language::parse(source)?, Language::parse(target)?)
    }

    /// Split a leading direction off free text, either as one word
    /// (`om>en Salaam`) or spaced out (`om > en Salaam`)
    pub fn split_prefix(input: &str) -> Option<(Self, &str)> {
        let (head, rest) = next_word(input);
        if let Ok(direction) = Self::parse(head) {
            return Some((direction, rest.trim_end()));
        }

        let (arrow, rest) = next_word(rest);
        let (target, rest) = next_word(rest);
        if !ARROWS.iter().any(|a| *a == arrow) {
            return None;
        }
        let source = Language::parse(head).ok()?;
        let target = Language::parse(target).ok()?;
        let direction = Self::new(source, target).ok()?;
        Some((direction, rest.trim_end()))
    }
}

/// First whitespace-delimited word and the remainder, both left-trimmed
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    let (word, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    (word, rest.trim_start())
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.source, self.target)
    }
}
