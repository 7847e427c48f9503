//! Inbound webhook payload

use serde::Deserialize;
use teloxide::types::ChatId;

/// The subset of a Telegram update the bot reads
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookUpdate {
    #[serde(default)]
    pub message: Option<InboundMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub chat: InboundChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundChat {
    pub id: ChatId,
}

impl InboundMessage {
    /// Message text, empty when the message carries none (stickers, photos, ...)
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}
