//! Shared test doubles for the completion provider and the messenger

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use teloxide::types::ChatId;

use nemisuz_bot::bot::CommandRouter;
use nemisuz_bot::completion::CompletionProvider;
use nemisuz_bot::errors::{CompletionError, DeliveryError};
use nemisuz_bot::markup::MarkupDialect;
use nemisuz_bot::messenger::Messenger;
use nemisuz_bot::server::AppState;

/// Completion provider returning a fixed result and counting calls
pub struct StubCompletion {
    result: Result<String, CompletionError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: Err(CompletionError::Transport("connection refused".to_string())),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone()
    }
}

/// Messenger recording every message it is asked to send
pub struct RecordingMessenger {
    sent: Mutex<Vec<(ChatId, String)>>,
    fail: bool,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        if self.fail {
            return Err(DeliveryError::Request("Bad Request: chat not found".to_string()));
        }
        Ok(())
    }
}

pub fn app_state(
    completion: Arc<StubCompletion>,
    messenger: Arc<RecordingMessenger>,
    dialect: MarkupDialect,
) -> AppState {
    AppState {
        router: CommandRouter::new(completion, dialect),
        messenger,
    }
}
