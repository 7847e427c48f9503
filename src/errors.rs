//! # Error Types Module
//!
//! This module defines the error types used at the boundaries of the bot:
//! startup configuration, the completion API and message delivery.

/// Errors raised while building the configuration at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    Missing(&'static str),
    /// An environment variable is present but cannot be used
    Invalid { key: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing environment variable: {key}"),
            ConfigError::Invalid { key, reason } => {
                write!(f, "Invalid value for {key}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised by a completion provider
#[derive(Debug, Clone)]
pub enum CompletionError {
    /// The request never produced an HTTP response (connect, timeout, TLS)
    Transport(String),
    /// The API answered with a non-success status
    Api { status: u16, message: String },
    /// The response body could not be decoded
    Decode(String),
    /// The API answered successfully but produced no text
    EmptyResponse(String),
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::Transport(msg) => write!(f, "Transport error: {msg}"),
            CompletionError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CompletionError::Decode(msg) => write!(f, "Decode error: {msg}"),
            CompletionError::EmptyResponse(msg) => write!(f, "Empty response: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CompletionError::Decode(err.to_string())
        } else {
            CompletionError::Transport(err.to_string())
        }
    }
}

/// Errors raised while sending a reply to the messaging platform
#[derive(Debug, Clone)]
pub enum DeliveryError {
    /// The Bot API request failed or was rejected
    Request(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Request(msg) => write!(f, "Delivery error: {msg}"),
        }
    }
}

impl std::error::Error for DeliveryError {}

impl From<teloxide::RequestError> for DeliveryError {
    fn from(err: teloxide::RequestError) -> Self {
        DeliveryError::Request(err.to_string())
    }
}
