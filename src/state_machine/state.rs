//! Conversation states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a user is in the dialogue.
///
/// There is no terminal state: every completed translation returns to
/// [`ConvState::MenuChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvState {
    /// Waiting for the user to pick a translation direction
    #[default]
    MenuChoice,
    /// Direction chosen, waiting for the text to translate
    AwaitingText,
    /// Guided variant of `MenuChoice`, entered through `/help`
    TutorialMenuChoice,
    /// Guided variant of `AwaitingText`
    TutorialAwaitingText,
}

impl ConvState {
    pub const ALL: [ConvState; 4] = [
        ConvState::MenuChoice,
        ConvState::AwaitingText,
        ConvState::TutorialMenuChoice,
        ConvState::TutorialAwaitingText,
    ];

    pub fn is_tutorial(self) -> bool {
        matches!(
            self,
            ConvState::TutorialMenuChoice | ConvState::TutorialAwaitingText
        )
    }

    /// True in the states that treat plain text as the text to translate
    pub fn is_capturing_text(self) -> bool {
        matches!(
            self,
            ConvState::AwaitingText | ConvState::TutorialAwaitingText
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConvState::MenuChoice => "menu_choice",
            ConvState::AwaitingText => "awaiting_text",
            ConvState::TutorialMenuChoice => "tutorial_menu_choice",
            ConvState::TutorialAwaitingText => "tutorial_awaiting_text",
        }
    }
}

impl fmt::Display for ConvState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
