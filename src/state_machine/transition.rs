//! Pure state transition function
//!
//! Given the same state, pending pair, and input this always produces the
//! same result, with no I/O. The table is flat: one match arm per
//! `(state, input class)` row.

use super::{Command, ConvState, Effect, Input};
use crate::lang::{Direction, DirectionError, Language, LanguageError};
use crate::messages;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub new_state: ConvState,
    /// Pending direction to store on the session
    pub pending: Option<Direction>,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState, pending: Option<Direction>) -> Self {
        Self {
            new_state: state,
            pending,
            effects: vec![],
        }
    }

    /// Back to the plain menu with nothing pending
    pub fn menu() -> Self {
        Self::new(ConvState::MenuChoice, None)
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

pub fn transition(state: &ConvState, pending: Option<Direction>, input: Input) -> TransitionResult {
    let state = *state;
    match (state, input) {
        // ============================================================
        // Commands, accepted from any state
        // ============================================================
        (_, Input::Command(Command::Start)) => TransitionResult::menu()
            .with_effect(Effect::ClearHistory)
            .with_effect(Effect::reply_with_menu(messages::welcome())),

        (_, Input::Command(Command::Restart)) => TransitionResult::menu()
            .with_effect(Effect::ClearHistory)
            .with_effect(Effect::reply_with_menu(messages::restarted())),

        (_, Input::Command(Command::Help)) => {
            TransitionResult::new(ConvState::TutorialMenuChoice, None)
                .with_effect(Effect::reply_with_menu(messages::tutorial_intro()))
        }

        (_, Input::Command(Command::History)) => {
            TransitionResult::new(state, pending).with_effect(Effect::ShowHistory)
        }

        (_, Input::Command(Command::Translate { args })) => match parse_translate_args(&args) {
            Ok((direction, text)) => TransitionResult::menu().with_effect(Effect::Translate {
                text,
                direction,
                tutorial: false,
            }),
            Err(reply) => TransitionResult::new(state, pending).with_effect(Effect::reply(reply)),
        },

        (_, Input::Command(Command::Choose(direction))) => choose(state, direction),

        (_, Input::Command(Command::Unknown(name))) => TransitionResult::new(state, pending)
            .with_effect(Effect::reply(messages::unknown_command(&name))),

        // ============================================================
        // Direction choice
        // ============================================================
        (ConvState::MenuChoice | ConvState::TutorialMenuChoice, Input::Text(text)) => {
            match Direction::parse(&text) {
                Ok(direction) => choose(state, direction),
                // Invalid input drops out of the tutorial
                Err(DirectionError::Unsupported(LanguageError::Unsupported(code))) => {
                    TransitionResult::menu().with_effect(Effect::reply_with_menu(format!(
                        "{}\n\n{}",
                        messages::unsupported_language(&code),
                        messages::MENU_PROMPT
                    )))
                }
                Err(DirectionError::NotADirection | DirectionError::SameLanguage) => {
                    TransitionResult::menu().with_effect(Effect::reply_with_menu(messages::MENU_PROMPT))
                }
            }
        }

        // ============================================================
        // Text capture
        // ============================================================
        (ConvState::AwaitingText | ConvState::TutorialAwaitingText, Input::Text(text)) => {
            let Some(direction) = pending else {
                // No pair to translate with; start the choice over
                return TransitionResult::menu()
                    .with_effect(Effect::reply_with_menu(messages::MENU_PROMPT));
            };
            let text = text.trim();
            if text.is_empty() {
                return TransitionResult::new(state, pending)
                    .with_effect(Effect::reply(messages::EMPTY_INPUT));
            }
            TransitionResult::menu().with_effect(Effect::Translate {
                text: text.to_string(),
                direction,
                tutorial: state.is_tutorial(),
            })
        }
    }
}

/// Record a direction and ask for the text, keeping the tutorial going if
/// the user is in it
fn choose(state: ConvState, direction: Direction) -> TransitionResult {
    if state.is_tutorial() {
        TransitionResult::new(ConvState::TutorialAwaitingText, Some(direction)).with_effect(
            Effect::reply_hiding_menu(messages::tutorial_text_prompt(direction)),
        )
    } else {
        TransitionResult::new(ConvState::AwaitingText, Some(direction))
            .with_effect(Effect::reply_hiding_menu(messages::text_prompt(direction)))
    }
}

/// Split `/translate` arguments into a direction and the text, or the
/// message to send back when they do not parse
fn parse_translate_args(args: &str) -> Result<(Direction, String), String> {
    let mut rest = args.trim();
    let mut codes = [""; 2];
    for code in &mut codes {
        let Some((head, tail)) = rest.split_once(char::is_whitespace) else {
            return Err(messages::TRANSLATE_USAGE.to_string());
        };
        *code = head;
        rest = tail.trim_start();
    }
    let text = rest.trim();
    if text.is_empty() {
        return Err(messages::TRANSLATE_USAGE.to_string());
    }

    let [source, target] = codes;
    let source = Language::parse(source);
    let target = Language::parse(target);
    let (source, target) = match (source, target) {
        (Ok(source), Ok(target)) => (source, target),
        (Err(LanguageError::Unsupported(code)), _) | (_, Err(LanguageError::Unsupported(code))) => {
            return Err(messages::unsupported_language(&code));
        }
    };
    let direction =
        Direction::new(source, target).map_err(|_| messages::SAME_LANGUAGE.to_string())?;
    Ok((direction, text.to_string()))
}
