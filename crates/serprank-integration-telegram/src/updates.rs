//! Inbound Telegram updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serprank::{RankRequest, Requester};
use tracing::debug;

/// One entry of a getUpdates response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    /// Unix time the message was sent
    pub date: i64,
    pub chat: TelegramChat,
    #[serde(default)]
    pub from: Option<TelegramUser>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramChat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl TelegramUser {
    /// Username, else first name, else the numeric id
    pub fn label(&self) -> String {
        match &self.username {
            Some(username) if !username.is_empty() => username.clone(),
            _ if !self.first_name.is_empty() => self.first_name.clone(),
            _ => self.id.to_string(),
        }
    }
}

/// A text message that should trigger a rank search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub update_id: i64,
    pub chat_id: i64,
    pub user_label: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Turn the message into a domain request
    pub fn into_request(self) -> RankRequest {
        RankRequest::new(Requester::new(self.chat_id, self.user_label), self.text)
            .with_received_at(self.sent_at)
    }
}

/// Filters raw updates down to actionable text messages
#[derive(Debug, Default)]
pub struct TelegramUpdateParser;

impl TelegramUpdateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an update; `None` if it does not carry a user text message
    pub fn parse(&self, update: &Update) -> Option<InboundMessage> {
        let Some(message) = &update.message else {
            debug!(update_id = %update.update_id, "Ignoring non-message update");
            return None;
        };

        // Ignore bot messages
        if message.from.as_ref().is_some_and(|user| user.is_bot) {
            return None;
        }

        let text = match message.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                debug!(update_id = %update.update_id, "Ignoring message without text");
                return None;
            }
        };

        let user_label = message
            .from
            .as_ref()
            .map(TelegramUser::label)
            .unwrap_or_else(|| message.chat.id.to_string());

        let sent_at = DateTime::<Utc>::from_timestamp(message.date, 0).unwrap_or_else(Utc::now);

        Some(InboundMessage {
            update_id: update.update_id,
            chat_id: message.chat.id,
            user_label,
            text,
            sent_at,
        })
    }
}
