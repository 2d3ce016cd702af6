//! RankRequest Entity
//!
//! An inbound "where does my site rank for this query" request,
//! as received from a chat platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The user who sent a request and where to answer them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// Platform chat to reply into
    pub chat_id: i64,
    /// Display label used in operator-channel messages
    pub label: String,
}

impl Requester {
    pub fn new(chat_id: i64, label: impl Into<String>) -> Self {
        Self {
            chat_id,
            label: label.into(),
        }
    }
}

/// A single inbound request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub id: Uuid,
    pub requester: Requester,
    /// Raw query text, passed to the provider unchanged
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl RankRequest {
    pub fn new(requester: Requester, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester,
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    /// Set the time the platform received the message
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }
}
