//! Telegram Bot API client wrapper

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::TelegramConfig;
use crate::updates::{TelegramUser, Update};

/// Extra time allowed on top of the long-poll timeout before the HTTP
/// request itself is abandoned.
const POLL_GRACE: Duration = Duration::from_secs(10);
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram API error types
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Telegram API error ({code}): {description}")]
    Api { code: i64, description: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Envelope shared by every Bot API response
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

#[derive(Serialize)]
struct GetUpdatesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Telegram Bot API client
pub struct TelegramClient {
    http: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }

    /// Identify the bot behind the token
    pub async fn get_me(&self) -> Result<TelegramUser, TelegramError> {
        let response = self
            .http
            .get(self.config.method_url("getMe"))
            .timeout(SEND_TIMEOUT)
            .send()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        read_result(response).await
    }

    /// Long-poll for new updates
    ///
    /// `offset` is one past the last update already handled; Telegram
    /// forgets every update below it.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        let timeout = self.config.poll_timeout_secs;
        debug!(offset = ?offset, timeout = %timeout, "Polling Telegram for updates");

        let response = self
            .http
            .post(self.config.method_url("getUpdates"))
            .timeout(Duration::from_secs(timeout) + POLL_GRACE)
            .json(&GetUpdatesRequest {
                offset,
                timeout,
                allowed_updates: &["message"],
            })
            .send()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        read_result(response).await
    }

    /// Send a plain text message to a chat
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        debug!(chat_id = %chat_id, content_len = %text.len(), "Sending message to Telegram");

        let response = self
            .http
            .post(self.config.method_url("sendMessage"))
            .timeout(SEND_TIMEOUT)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        read_result::<serde_json::Value>(response)
            .await
            .inspect_err(|e| {
                error!(error = %e, chat_id = %chat_id, "Failed to send Telegram message")
            })?;

        Ok(())
    }
}

/// Unwrap the Bot API envelope, turning `ok: false` into an error
async fn read_result<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TelegramError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

    let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(TelegramError::Api {
                code: i64::from(status.as_u16()),
                description: body,
            })
        }
        Err(e) => return Err(TelegramError::ParseError(e.to_string())),
    };

    if !envelope.ok {
        return Err(TelegramError::Api {
            code: envelope
                .error_code
                .unwrap_or_else(|| i64::from(status.as_u16())),
            description: envelope
                .description
                .unwrap_or_else(|| "no description".to_string()),
        });
    }

    envelope
        .result
        .ok_or_else(|| TelegramError::ParseError("response has no result".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> TelegramClient {
        TelegramClient::new(
            TelegramConfig::new("TOKEN", -1001)
                .with_poll_timeout(1)
                .with_api_base_url(server.uri()),
        )
    }

    #[tokio::test]
    async fn test_send_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": 42,
                "text": "hello"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "message_id": 7, "date": 0, "chat": { "id": 42 } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).send_message(42, "hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let err = client(&server).send_message(1, "hi").await.unwrap_err();
        match err {
            TelegramError::Api { code, description } => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client(&server).send_message(1, "hi").await.unwrap_err();
        assert!(matches!(err, TelegramError::Api { code: 502, .. }));
    }

    #[tokio::test]
    async fn test_get_updates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botTOKEN/getUpdates"))
            .and(body_partial_json(serde_json::json!({ "offset": 10, "timeout": 1 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": [{
                    "update_id": 10,
                    "message": {
                        "message_id": 1,
                        "date": 1700000000,
                        "chat": { "id": 99, "type": "private" },
                        "from": { "id": 5, "is_bot": false, "first_name": "Ana", "username": "ana" },
                        "text": "rust async runtime"
                    }
                }]
            })))
            .mount(&server)
            .await;

        let updates = client(&server).get_updates(Some(10)).await.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 10);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.text.as_deref(), Some("rust async runtime"));
    }

    #[tokio::test]
    async fn test_get_me() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/botTOKEN/getMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "id": 1, "is_bot": true, "first_name": "Rank", "username": "rank_bot" }
            })))
            .mount(&server)
            .await;

        let me = client(&server).get_me().await.unwrap();
        assert_eq!(me.username.as_deref(), Some("rank_bot"));
    }
}
