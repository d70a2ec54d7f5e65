//! Runtime that applies state transitions and talks to the collaborators

mod executor;
pub mod traits;


pub use executor::BotRuntime;
pub use traits::*;

use crate::feedback::JsonlFeedbackSink;
use crate::telegram::TelegramClient;
use crate::translate::{GoogleTranslator, LoggingTranslator};

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime =
    BotRuntime<LoggingTranslator<GoogleTranslator>, TelegramClient, JsonlFeedbackSink>;
