//! # Messenger Tests
//!
//! Tests for the Telegram messenger against a mocked Bot API.

use std::time::Duration;

use serde_json::json;
use teloxide::types::ChatId;
use wiremock::matchers::{body_partial_json, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nemisuz_bot::config::TelegramConfig;
use nemisuz_bot::markup::MarkupDialect;
use nemisuz_bot::messenger::{deliver, Messenger, TelegramMessenger};

const SEND_MESSAGE: &str = r"(?i)^/bot[^/]+/sendmessage$";

fn messenger_for(server: &MockServer, dialect: MarkupDialect) -> TelegramMessenger {
    let config = TelegramConfig {
        token: "123456:TEST".to_string(),
        api_url: server.uri(),
        webhook_url: None,
    };
    TelegramMessenger::new(&config, dialect, Duration::from_secs(5)).unwrap()
}

fn sent_message(chat_id: i64, text: &str) -> serde_json::Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 1,
            "date": 1_700_000_000,
            "chat": { "id": chat_id, "type": "private", "first_name": "Test" },
            "from": { "id": 123456, "is_bot": true, "first_name": "NemisUz" },
            "text": text
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// HTML deployments send parse_mode "HTML"
    #[tokio::test]
    async fn test_send_text_html() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE))
            .and(body_partial_json(json!({
                "chat_id": 42,
                "text": "<b>Hallo</b>",
                "parse_mode": "HTML"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(sent_message(42, "Hallo")))
            .expect(1)
            .mount(&server)
            .await;

        let messenger = messenger_for(&server, MarkupDialect::Html);
        let result = messenger.send_text(ChatId(42), "<b>Hallo</b>").await;

        assert!(result.is_ok(), "unexpected error: {result:?}");
    }

    /// Markdown deployments send parse_mode "MarkdownV2"
    #[tokio::test]
    async fn test_send_text_markdown() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE))
            .and(body_partial_json(json!({ "chat_id": 7, "parse_mode": "MarkdownV2" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(sent_message(7, "Hallo")))
            .expect(1)
            .mount(&server)
            .await;

        let messenger = messenger_for(&server, MarkupDialect::Markdown);
        let _ = messenger.send_text(ChatId(7), "*Hallo*").await;
    }

    /// Plain deployments send no parse_mode at all
    #[tokio::test]
    async fn test_send_text_plain_has_no_parse_mode() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE))
            .respond_with(ResponseTemplate::new(200).set_body_json(sent_message(7, "Hallo")))
            .mount(&server)
            .await;

        let messenger = messenger_for(&server, MarkupDialect::Plain);
        let _ = messenger.send_text(ChatId(7), "Hallo").await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["text"], "Hallo");
        assert!(body.get("parse_mode").is_none());
    }

    /// Bot API rejections become delivery errors
    #[tokio::test]
    async fn test_send_text_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let messenger = messenger_for(&server, MarkupDialect::Html);
        assert!(messenger.send_text(ChatId(1), "Hallo").await.is_err());
    }

    /// `deliver` swallows failures, including an unreachable API
    #[tokio::test]
    async fn test_deliver_swallows_errors() {
        let config = TelegramConfig {
            token: "123456:TEST".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
            webhook_url: None,
        };
        let messenger =
            TelegramMessenger::new(&config, MarkupDialect::Html, Duration::from_secs(1)).unwrap();

        deliver(&messenger, ChatId(1), "Hallo").await;
    }

    /// Webhook registration calls setWebhook with the public URL
    #[tokio::test]
    async fn test_register_webhook() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"(?i)^/bot[^/]+/setwebhook$"))
            .and(body_partial_json(json!({ "url": "https://bot.example.com/webhook" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let messenger = messenger_for(&server, MarkupDialect::Html);
        messenger
            .register_webhook("https://bot.example.com/webhook")
            .await
            .unwrap();
    }

    /// An invalid API URL is rejected at construction
    #[test]
    fn test_invalid_api_url() {
        let config = TelegramConfig {
            token: "123456:TEST".to_string(),
            api_url: "not a url".to_string(),
            webhook_url: None,
        };
        assert!(TelegramMessenger::new(&config, MarkupDialect::Html, Duration::from_secs(1)).is_err());
    }
}
