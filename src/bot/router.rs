//! Command routing: canned replies for menu commands, completions for the rest

use std::sync::Arc;
use tracing::debug;

use crate::completion::{reply_or_fallback, CompletionProvider};
use crate::markup::MarkupDialect;

use super::command::Command;
use super::ui_builder::canned_reply;

/// Chooses the reply for an incoming message
#[derive(Clone)]
pub struct CommandRouter {
    completion: Arc<dyn CompletionProvider>,
    dialect: MarkupDialect,
}

impl CommandRouter {
    pub fn new(completion: Arc<dyn CompletionProvider>, dialect: MarkupDialect) -> Self {
        Self {
            completion,
            dialect,
        }
    }

    /// Produce the reply for `text`. Never fails and never returns an empty string.
    pub async fn route(&self, text: &str) -> String {
        let text = text.trim();

        match Command::parse(text) {
            Some(command) => {
                debug!(command = command.literal(), "Matched menu command");
                canned_reply(command, self.dialect)
            }
            None => {
                let reply = reply_or_fallback(self.completion.as_ref(), text).await;
                self.dialect.escape(&reply)
            }
        }
    }
}
