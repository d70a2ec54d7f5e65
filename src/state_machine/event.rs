//! Inputs that drive state transitions

use crate::lang::Direction;

/// A text message from the user, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text(String),
}

/// Slash commands, accepted from any state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    Help,
    History,
    /// `/to_en` and `/to_or`: pick a direction without the menu
    Choose(Direction),
    /// `/translate <source> <target> <text>`, arguments unparsed
    Translate { args: String },
    Unknown(String),
}

impl Input {
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim_start();
        match trimmed.strip_prefix('/') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_alphabetic()) => {
                Input::Command(Command::parse(rest))
            }
            _ => Input::Text(text.to_string()),
        }
    }
}

impl Command {
    /// Parse a command with its leading `/` removed
    fn parse(body: &str) -> Self {
        let (head, args) = body
            .split_once(char::is_whitespace)
            .unwrap_or((body, ""));
        // Group chats address commands as `/help@SomeBot`
        let name = head.split('@').next().unwrap_or(head).to_lowercase();

        match name.as_str() {
            "start" => Command::Start,
            "restart" => Command::Restart,
            "help" => Command::Help,
            "history" => Command::History,
            "to_en" => Command::Choose(Direction::OROMO_TO_ENGLISH),
            "to_or" | "to_om" => Command::Choose(Direction::ENGLISH_TO_OROMO),
            "translate" => Command::Translate {
                args: args.trim().to_string(),
            },
            _ => Command::Unknown(name),
        }
    }
}
