//! Per-user conversation state machine
//!
//! A pure transition function over `(state, input)`; the runtime applies the
//! new state and executes the returned effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Command, Input};
pub use state::ConvState;
pub use transition::transition;
