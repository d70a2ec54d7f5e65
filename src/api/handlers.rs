//! HTTP request handlers

use super::types::ErrorResponse;
use super::AppState;
use crate::dispatch::{classify, EventHandler};
use crate::messages;
use crate::telegram::Update;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Create the API router
pub fn create_router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        // Liveness probe; GET routes answer HEAD too
        .route("/", get(health))
        .route(webhook_path, post(receive_update))
        .with_state(state)
}

async fn health() -> &'static str {
    messages::HEALTH_BODY
}

/// Acknowledge every well-formed update at once and handle it in the
/// background, so slow translations never hold up Telegram's delivery.
async fn receive_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    if let Some(expected) = state.webhook_secret.as_deref() {
        let presented = headers
            .get(SECRET_HEADER)
            .and_then(|value| value.to_str().ok());
        if presented != Some(expected) {
            tracing::warn!("Rejected update with missing or wrong secret token");
            return Err(AppError::Unauthorized);
        }
    }

    let update: Update = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Unparseable update body");
        AppError::BadRequest(format!("invalid update: {e}"))
    })?;
    let update_id = update.update_id;

    let event = match classify(update) {
        Ok(event) => event,
        Err(e) => {
            tracing::info!(update_id, error = %e, "Ignoring update");
            return Ok(StatusCode::OK);
        }
    };

    tracing::debug!(
        update_id,
        kind = event.kind(),
        user_id = event.sender().id,
        "Accepted update"
    );
    let handler = state.handler.clone();
    tokio::spawn(async move {
        handler.handle(event).await;
    });

    Ok(StatusCode::OK)
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid secret token".to_string()),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
