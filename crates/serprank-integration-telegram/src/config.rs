//! Telegram configuration

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;

/// Configuration for Telegram integration
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather
    pub token: String,
    /// Chat that mirrors every outcome for the operator
    pub operator_chat_id: i64,
    /// Long-poll timeout for getUpdates, in seconds
    pub poll_timeout_secs: u64,
    /// Bot API base URL (overridable for tests or a local Bot API server)
    pub api_base_url: String,
}

impl TelegramConfig {
    /// Create a new configuration with a token and operator chat
    pub fn new(token: impl Into<String>, operator_chat_id: i64) -> Self {
        Self {
            token: token.into(),
            operator_chat_id,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Set the long-poll timeout
    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }

    /// Set the Bot API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint URL for a Bot API method
    pub(crate) fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base_url, self.token, method)
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("operator_chat_id", &self.operator_chat_id)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
