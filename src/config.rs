//! # Configuration Module
//!
//! This module defines the immutable configuration record built once at
//! startup and handed to the completion client, the messenger and the server.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::errors::ConfigError;
use crate::markup::MarkupDialect;

// Constants for bot configuration
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-001";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling bound
    pub top_p: f32,
    /// Top-k sampling bound
    pub top_k: u32,
    /// Maximum number of generated tokens
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 512,
        }
    }
}

/// Gemini connection settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model identifier, e.g. "gemini-1.5-pro-001"
    pub model: String,
    /// Base URL without trailing slash
    pub api_url: String,
    pub generation: GenerationConfig,
}

/// Telegram Bot API settings
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub api_url: String,
    /// Public URL to register with `setWebhook` at startup
    pub webhook_url: Option<String>,
}

/// Complete configuration of the bot process
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub gemini: GeminiConfig,
    /// Formatting dialect used for every reply
    pub dialect: MarkupDialect,
    /// Address the webhook server listens on
    pub listen_addr: SocketAddr,
    /// Timeout applied to each outbound HTTP call
    pub http_timeout: Duration,
}

impl BotConfig {
    /// Build the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// - `ConfigError::Missing` when `TELEGRAM_TOKEN` or `GEMINI_API_KEY` is absent
    /// - `ConfigError::Invalid` when an optional value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
        let telegram_token = get("TELEGRAM_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_TOKEN"))?;

        let dialect = match get("REPLY_FORMAT") {
            Some(raw) => raw.parse::<MarkupDialect>().map_err(|reason| ConfigError::Invalid {
                key: "REPLY_FORMAT",
                reason,
            })?,
            None => MarkupDialect::default(),
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let bind_ip: IpAddr = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;
        let listen_addr = SocketAddr::new(bind_ip, port);

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: "HTTP_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "HTTP_TIMEOUT_SECS",
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            telegram: TelegramConfig {
                token: telegram_token,
                api_url: trim_base_url(get("TELEGRAM_API_URL"), DEFAULT_TELEGRAM_API_URL),
                webhook_url: get("WEBHOOK_URL"),
            },
            gemini: GeminiConfig {
                api_key: gemini_api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_url: trim_base_url(get("GEMINI_API_URL"), DEFAULT_GEMINI_API_URL),
                generation: GenerationConfig::default(),
            },
            dialect,
            listen_addr,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn trim_base_url(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
