//! Message Handler module for processing incoming webhook updates

use tracing::{debug, info, warn};

use crate::messenger::{deliver, Messenger};

use super::router::CommandRouter;
use super::update::WebhookUpdate;

/// Decode a webhook body. Malformed payloads are logged and dropped.
pub fn parse_update(body: &[u8]) -> Option<WebhookUpdate> {
    match serde_json::from_slice::<WebhookUpdate>(body) {
        Ok(update) => Some(update),
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Ignoring malformed webhook payload");
            None
        }
    }
}

/// Route the update's text and deliver the reply to its chat.
///
/// Updates without a message or with blank text produce no outbound call.
pub async fn message_handler(
    update: WebhookUpdate,
    router: &CommandRouter,
    messenger: &dyn Messenger,
) {
    let Some(message) = update.message else {
        debug!("Update carries no message, skipping");
        return;
    };

    let chat_id = message.chat.id;
    let text = message.text();
    if text.trim().is_empty() {
        debug!(chat_id = %chat_id, "Message has no text, skipping");
        return;
    }

    info!(chat_id = %chat_id, text = %text, "Incoming message");

    let reply = router.route(text).await;
    debug!(chat_id = %chat_id, reply = %reply, "Reply composed");

    deliver(messenger, chat_id, &reply).await;
}
