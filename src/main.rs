//! Hiika - Afaan Oromo / English translation bot for Telegram
//!
//! Receives Bot API updates over a webhook, drives a per-user dialogue
//! state machine, and translates through a remote translation service.

mod api;
mod callback;
mod config;
mod dispatch;
mod feedback;
mod lang;
mod messages;
mod runtime;
mod session;
mod state_machine;
mod telegram;
mod translate;

use api::{create_router, AppState};
use config::BotConfig;
use feedback::JsonlFeedbackSink;
use runtime::ProductionRuntime;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram::TelegramClient;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use translate::{GoogleTranslator, LoggingTranslator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hiika=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration; missing credentials stop the process here
    let config = BotConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let translator = LoggingTranslator::new(GoogleTranslator::new(
        config.translate_api_key.clone(),
        &config.translate_api_base,
        config.translate_timeout,
    )?);
    let telegram = TelegramClient::new(&config.bot_token, &config.telegram_api_base)?;

    if let Some(url) = config.webhook_url.as_deref() {
        telegram
            .set_webhook(url, config.webhook_secret.as_deref())
            .await?;
        tracing::info!(url, "Webhook registered");
    }

    let feedback = JsonlFeedbackSink::new(config.feedback_path.clone());
    tracing::info!(path = %feedback.path().display(), "Recording feedback");

    let runtime: Arc<ProductionRuntime> = Arc::new(runtime::BotRuntime::new(
        translator,
        telegram,
        feedback,
        config.translate_timeout,
    ));

    let state = AppState::new(runtime, config.webhook_secret.clone());
    let app = create_router(state, &config.webhook_path).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, webhook_path = %config.webhook_path, "Translator bot listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
