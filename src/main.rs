use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nemisuz_bot::bot::CommandRouter;
use nemisuz_bot::completion::GeminiClient;
use nemisuz_bot::config::BotConfig;
use nemisuz_bot::messenger::TelegramMessenger;
use nemisuz_bot::server::{self, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing();

    info!("Starting NemisUz Gemini Bot");

    let config = BotConfig::from_env()?;
    info!(
        model = %config.gemini.model,
        dialect = ?config.dialect,
        timeout_secs = config.http_timeout.as_secs(),
        "Configuration loaded"
    );

    let gemini = GeminiClient::new(&config.gemini, config.http_timeout)?;
    let messenger = TelegramMessenger::new(&config.telegram, config.dialect, config.http_timeout)?;

    if let Some(url) = &config.telegram.webhook_url {
        if let Err(e) = messenger.register_webhook(url).await {
            warn!(error = %e, "Webhook registration failed, continuing with the existing webhook");
        }
    }

    let state = AppState {
        router: CommandRouter::new(Arc::new(gemini), config.dialect),
        messenger: Arc::new(messenger),
    };

    server::serve(config.listen_addr, state).await
}
