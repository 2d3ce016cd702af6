//! Environment configuration for the bot
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by `main`.

use serprank::PageBudget;
use thiserror::Error;

const DEFAULT_SEARCH_API_BASE_URL: &str = "https://customsearch.googleapis.com";
const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;

/// Configuration errors reported at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Search provider and matching settings
#[derive(Clone)]
pub struct SearchSettings {
    /// Custom Search engine id (`cx`), the site-search scope
    pub engine_id: String,
    pub api_key: String,
    /// Substring the result URL must contain
    pub target_domain: String,
    pub page_budget: PageBudget,
    pub api_base_url: String,
}

/// Telegram bot settings
#[derive(Clone)]
pub struct TelegramSettings {
    pub token: String,
    pub operator_chat_id: i64,
    pub poll_timeout_secs: u64,
    pub api_base_url: String,
}

impl std::fmt::Debug for SearchSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSettings")
            .field("engine_id", &self.engine_id)
            .field("api_key", &"<redacted>")
            .field("target_domain", &self.target_domain)
            .field("page_budget", &self.page_budget)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl std::fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("token", &"<redacted>")
            .field("operator_chat_id", &self.operator_chat_id)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SearchSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_budget = match non_empty(&lookup, "PAGE_BUDGET") {
            Some(raw) => raw.parse::<PageBudget>().map_err(|e| ConfigError::Invalid {
                key: "PAGE_BUDGET",
                reason: e.to_string(),
            })?,
            None => PageBudget::default(),
        };

        Ok(Self {
            engine_id: required(&lookup, "SEARCH_ENGINE_ID")?,
            api_key: required(&lookup, "SEARCH_API_KEY")?,
            target_domain: lookup("TARGET_DOMAIN").unwrap_or_default(),
            page_budget,
            api_base_url: non_empty(&lookup, "SEARCH_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_API_BASE_URL.to_string()),
        })
    }
}

impl TelegramSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let operator_chat_id = required(&lookup, "CHAT_ID")?
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::Invalid {
                key: "CHAT_ID",
                reason: e.to_string(),
            })?;

        let poll_timeout_secs = match non_empty(&lookup, "POLL_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "POLL_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_POLL_TIMEOUT_SECS,
        };

        Ok(Self {
            token: required(&lookup, "BOT_TOKEN")?,
            operator_chat_id,
            poll_timeout_secs,
            api_base_url: non_empty(&lookup, "TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE_URL.to_string()),
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).ok_or(ConfigError::Missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_search_defaults() {
        let settings = SearchSettings::from_lookup(env(&[
            ("SEARCH_ENGINE_ID", "cx-1"),
            ("SEARCH_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(settings.engine_id, "cx-1");
        assert_eq!(settings.target_domain, "");
        assert_eq!(settings.page_budget, PageBudget::default());
        assert_eq!(settings.api_base_url, DEFAULT_SEARCH_API_BASE_URL);
    }

    #[test]
    fn test_search_missing_engine_id() {
        let err = SearchSettings::from_lookup(env(&[("SEARCH_API_KEY", "key")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SEARCH_ENGINE_ID")));
    }

    #[test]
    fn test_invalid_page_budget() {
        let err = SearchSettings::from_lookup(env(&[
            ("SEARCH_ENGINE_ID", "cx-1"),
            ("SEARCH_API_KEY", "key"),
            ("PAGE_BUDGET", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PAGE_BUDGET", .. }));
    }

    #[test]
    fn test_telegram_settings() {
        let settings = TelegramSettings::from_lookup(env(&[
            ("BOT_TOKEN", "123:abc"),
            ("CHAT_ID", "-100123"),
            ("POLL_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(settings.operator_chat_id, -100123);
        assert_eq!(settings.poll_timeout_secs, 15);
        assert_eq!(settings.api_base_url, DEFAULT_TELEGRAM_API_BASE_URL);
    }

    #[test]
    fn test_telegram_bad_chat_id() {
        let err = TelegramSettings::from_lookup(env(&[
            ("BOT_TOKEN", "123:abc"),
            ("CHAT_ID", "operators"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CHAT_ID", .. }));
    }
}
