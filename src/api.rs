//! Webhook ingress

mod handlers;
mod types;

pub use handlers::create_router;

use crate::dispatch::EventHandler;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<dyn EventHandler>,
    /// Expected `X-Telegram-Bot-Api-Secret-Token`, if one was registered
    pub webhook_secret: Option<Arc<str>>,
}

impl AppState {
    pub fn new(handler: Arc<dyn EventHandler>, webhook_secret: Option<String>) -> Self {
        Self {
            handler,
            webhook_secret: webhook_secret.map(Arc::from),
        }
    }
}
