//! Per-user session state and the registry that serializes access to it

mod history;
mod records;

pub use history::{HistoryEntry, HistoryLedger};
pub use records::{RecordId, RecordStore};

use crate::lang::{Direction, Language};
use crate::state_machine::ConvState;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Telegram user id
pub type UserId = i64;

/// Everything the bot remembers about one user, for the process lifetime
#[derive(Debug, Default)]
pub struct UserSession {
    pub state: ConvState,
    pub pending_source: Option<Language>,
    pub pending_target: Option<Language>,
    pub history: HistoryLedger,
    pub records: RecordStore,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending pair, if both halves are set
    pub fn pending_direction(&self) -> Option<Direction> {
        match (self.pending_source, self.pending_target) {
            (Some(source), Some(target)) => Some(Direction { source, target }),
            _ => None,
        }
    }

    pub fn set_pending(&mut self, direction: Option<Direction>) {
        self.pending_source = direction.map(|d| d.source);
        self.pending_target = direction.map(|d| d.target);
    }
}

/// Registry of sessions, each behind its own async mutex.
///
/// Holding a session's guard for the whole handling of an event is what
/// keeps two events from the same user from interleaving mid-transition.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<UserSession>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for a user, creating it on first contact
    pub async fn session(&self, user_id: UserId) -> Arc<Mutex<UserSession>> {
        if let Some(session) = self.sessions.read().await.get(&user_id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(user_id).or_insert_with(|| {
            tracing::debug!(user_id, "Creating session");
            Arc::new(Mutex::new(UserSession::new()))
        }))
    }

    /// Existing session only; never creates one
    pub async fn get(&self, user_id: UserId) -> Option<Arc<Mutex<UserSession>>> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
