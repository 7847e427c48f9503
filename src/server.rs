//! Webhook HTTP server
//!
//! `POST /webhook` receives Telegram updates and `GET /` answers health checks.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::bot::{message_handler, parse_update, CommandRouter};
use crate::messenger::Messenger;

/// Largest webhook body that is buffered; Telegram updates are far smaller
pub const MAX_WEBHOOK_BODY_BYTES: usize = 1024 * 1024;

/// Body returned by `GET /`
pub const HEALTH_TEXT: &str = "NemisUz Gemini-Bot ist online!";

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub router: CommandRouter,
    pub messenger: Arc<dyn Messenger>,
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn home() -> &'static str {
    HEALTH_TEXT
}

/// Always answers 200 "ok" so Telegram never retries or disables the webhook.
async fn webhook(State(state): State<Arc<AppState>>, body: Body) -> (StatusCode, &'static str) {
    let body = match to_bytes(body, MAX_WEBHOOK_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, limit = MAX_WEBHOOK_BODY_BYTES, "Ignoring unreadable or oversized webhook body");
            return (StatusCode::OK, "ok");
        }
    };

    if let Some(update) = parse_update(&body) {
        message_handler(update, &state.router, state.messenger.as_ref()).await;
    }
    (StatusCode::OK, "ok")
}

/// Serve until Ctrl+C or SIGTERM; in-flight requests complete before exit.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Webhook server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM, only Ctrl+C will stop the server");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
