//! Telegram Integration for serprank
//!
//! This crate provides the Telegram side of the rank bot: a thin Bot API
//! client, parsing of inbound updates into rank requests, and a
//! [`Notifier`](serprank::Notifier) that formats outcomes as chat messages.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serprank_integration_telegram::{TelegramConfig, TelegramNotifier};
//!
//! let config = TelegramConfig::new("your-bot-token", operator_chat_id);
//! let notifier = TelegramNotifier::new(config);
//! ```

mod client;
mod config;
pub mod format;
mod integration;
mod updates;

pub use client::{TelegramClient, TelegramError};
pub use config::TelegramConfig;
pub use integration::TelegramNotifier;
pub use updates::{
    InboundMessage, TelegramChat, TelegramMessage, TelegramUpdateParser, TelegramUser, Update,
};
