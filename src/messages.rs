//! User-facing message texts

use crate::callback::Rating;
use crate::lang::{Direction, Language};
use crate::session::HistoryEntry;
use crate::telegram::MAX_MESSAGE_CHARS;
use std::borrow::Cow;
use std::fmt::Write;

pub const MENU_PROMPT: &str = "Choose a translation direction:";

pub const NEXT_PROMPT: &str = "Choose a direction for your next translation.";

pub const EMPTY_INPUT: &str = "Please enter non-empty text to translate.";

pub const TRANSLATION_FAILED: &str = "An error occurred during translation. Please try again.";

pub const NO_HISTORY: &str = "You have no translations yet.";

pub const TRANSLATE_USAGE: &str = "Please use the format: /translate <source_lang> <target_lang> <text>\n\
     Example: /translate om en Salaam";

pub const SAME_LANGUAGE: &str = "Source and target languages must be different.";

pub const TUTORIAL_FOLLOW_UP: &str = "Well done! Tap 👍 or 👎 under a translation to rate it. \
     Send /history to see your last translations, or /restart to start over.";

pub const RECORD_NOT_FOUND: &str = "This translation has expired and can no longer be rated.";

pub const MALFORMED_TOKEN: &str = "This button is no longer valid.";

pub const RATING_THANKS: &str = "Thanks for your feedback!";

pub const HEALTH_BODY: &str = "Translator bot is running";

pub fn welcome() -> String {
    format!(
        "Welcome to the Afaan Oromo ↔ English Translator Bot!\n\n\
         Pick a direction below, then send the text you want translated.\n\
         Commands: /to_en or /to_or to pick a direction directly, \
         /help for a guided tour, /history for your last translations, \
         /translate <source_lang> <target_lang> <text> for a one-shot translation.\n\n\
         {}\n\n{MENU_PROMPT}",
        supported_languages()
    )
}

pub fn restarted() -> String {
    format!("Starting over. Your history has been cleared.\n\n{MENU_PROMPT}")
}

pub fn tutorial_intro() -> String {
    format!(
        "Let's walk through a translation.\n\n\
         Step 1: tap one of the buttons below to choose a direction.\n\
         Step 2: send the text you want translated.\n\
         Step 3: rate the result with 👍 or 👎.\n\n{MENU_PROMPT}"
    )
}

pub fn supported_languages() -> String {
    let mut out = String::from("Supported languages:");
    for lang in Language::ALL {
        let _ = write!(out, "\n- {}: {}", lang.code(), lang.name());
    }
    out
}

pub fn unsupported_language(code: &str) -> String {
    let codes = Language::ALL
        .iter()
        .map(|lang| format!("'{}' for {}", lang.code(), lang.name()))
        .collect::<Vec<_>>()
        .join(" or ");
    format!("Unsupported language '{code}'. Use {codes}.")
}

pub fn unknown_command(name: &str) -> String {
    format!("Unknown command /{name}. Send /help for a guided tour.")
}

pub fn text_prompt(direction: Direction) -> String {
    format!(
        "Send the {} text you want translated into {}.",
        direction.source.name(),
        direction.target.name()
    )
}

pub fn tutorial_text_prompt(direction: Direction) -> String {
    let example = match direction.source {
        Language::Oromo => "Akkam jirta?",
        Language::English => "Good morning",
    };
    format!("{}\nFor example, try: {example}", text_prompt(direction))
}

/// Room left for labels and the rating line once both texts are clipped
const RESULT_MARGIN_CHARS: usize = 200;

/// Each text gets half of what is left, so the result plus its rating line
/// always fits one message
const MAX_RESULT_PART_CHARS: usize = (MAX_MESSAGE_CHARS - RESULT_MARGIN_CHARS) / 2;

/// Five entries of two texts each share one message
const MAX_HISTORY_PART_CHARS: usize = (MAX_MESSAGE_CHARS - 2 * RESULT_MARGIN_CHARS) / 10;

pub fn translation_result(direction: Direction, original: &str, translated: &str) -> String {
    format!(
        "Original ({}): {}\nTranslated ({}): {}",
        direction.source.name(),
        clip(original, MAX_RESULT_PART_CHARS),
        direction.target.name(),
        clip(translated, MAX_RESULT_PART_CHARS)
    )
}

/// Cut to at most `max` chars, marking the cut with an ellipsis
fn clip(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    let mut clipped: String = text.chars().take(max - 1).collect();
    clipped.push('…');
    Cow::Owned(clipped)
}

pub fn rated(result_text: &str, rating: Rating) -> String {
    format!("{result_text}\n\nRated: {}", rating.emoji())
}

pub fn history<'a>(entries: impl ExactSizeIterator<Item = &'a HistoryEntry>) -> String {
    if entries.len() == 0 {
        return NO_HISTORY.to_string();
    }
    let mut out = String::from("Your recent translations:");
    for (n, entry) in entries.enumerate() {
        let _ = write!(
            out,
            "\n\n{}. [{}] {} ({})\n   {}",
            n + 1,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            clip(&entry.original_text, MAX_HISTORY_PART_CHARS),
            entry.direction,
            clip(&entry.translated_text, MAX_HISTORY_PART_CHARS)
        );
    }
    out
}
