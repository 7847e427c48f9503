//! # Messenger Module
//!
//! Outbound side of the bot: sends reply text to a Telegram chat.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::config::TelegramConfig;
use crate::errors::DeliveryError;
use crate::markup::MarkupDialect;

/// Something that can deliver a text message to a chat
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError>;
}

/// Send `text` to `chat_id`, logging the outcome.
///
/// Delivery failures are logged and discarded.
pub async fn deliver(messenger: &dyn Messenger, chat_id: ChatId, text: &str) {
    match messenger.send_text(chat_id, text).await {
        Ok(()) => info!(chat_id = %chat_id, "Reply delivered"),
        Err(e) => error!(chat_id = %chat_id, error = %e, "Failed to deliver reply"),
    }
}

/// [`Messenger`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
    dialect: MarkupDialect,
}

impl TelegramMessenger {
    /// Create a messenger whose requests time out after `timeout`
    pub fn new(config: &TelegramConfig, dialect: MarkupDialect, timeout: Duration) -> Result<Self> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(timeout)
            .build()
            .context("Failed to build Telegram HTTP client")?;
        let api_url = Url::parse(&config.api_url)
            .with_context(|| format!("Invalid Telegram API URL: {}", config.api_url))?;

        let bot = Bot::with_client(config.token.clone(), client).set_api_url(api_url);

        Ok(Self { bot, dialect })
    }

    /// Point Telegram at `url` for future updates
    pub async fn register_webhook(&self, url: &str) -> Result<()> {
        let url = Url::parse(url).with_context(|| format!("Invalid webhook URL: {url}"))?;
        self.bot
            .set_webhook(url.clone())
            .await
            .context("setWebhook request failed")?;
        info!(webhook_url = %url, "Webhook registered with Telegram");
        Ok(())
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        let mut request = self.bot.send_message(chat_id, text);
        if let Some(mode) = self.dialect.parse_mode() {
            request = request.parse_mode(mode);
        }
        request.await?;
        Ok(())
    }
}
