//! Google Custom Search JSON API page source.
//!
//! Each call fetches one page of up to ten results from
//! `GET /customsearch/v1` for the query's search engine (`cx`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serprank::{Page, ProviderError, Query, ResultItem, SearchPageSource};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://customsearch.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search page source backed by the Custom Search JSON API.
#[derive(Clone)]
pub struct GoogleCsePageSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleCsePageSource {
    /// Creates a new source using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl SearchPageSource for GoogleCsePageSource {
    async fn fetch_page(&self, query: &Query, start_offset: u64) -> Result<Page, ProviderError> {
        let url = format!("{}/customsearch/v1", self.base_url);
        debug!(offset = %start_offset, cx = %query.site_scope, "Fetching search page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", &self.api_key),
                ("cx", &query.site_scope),
                ("q", &query.text),
            ])
            .query(&[("start", start_offset)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }

        let payload: SearchResponse = serde_json::from_str(&body)
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

        let page = into_page(payload, start_offset)?;
        debug!(
            offset = %start_offset,
            items = %page.items.len(),
            total = %page.total_reported,
            "Fetched search page"
        );

        Ok(page)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    search_information: Option<SearchInformation>,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchInformation {
    /// Decimal string, e.g. "45300000"
    total_results: String,
}

#[derive(Deserialize)]
struct SearchItem {
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

// ============================================
// Helper Functions
// ============================================

fn into_page(payload: SearchResponse, start_offset: u64) -> Result<Page, ProviderError> {
    let info = payload.search_information.ok_or_else(|| {
        ProviderError::MalformedResponse("response has no searchInformation".to_string())
    })?;

    let total_reported = info.total_results.trim().parse::<u64>().map_err(|err| {
        ProviderError::MalformedResponse(format!(
            "invalid totalResults '{}': {}",
            info.total_results, err
        ))
    })?;

    let items = payload
        .items
        .into_iter()
        .map(|item| ResultItem::new(item.link, item.title, item.snippet))
        .collect();

    Ok(Page::new(items, start_offset, total_reported))
}

fn map_http_error(status: StatusCode, body: &str) -> ProviderError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let message = parsed
        .as_ref()
        .map(|envelope| envelope.error.message.clone())
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| body.to_string());

    let quota_reported = parsed.as_ref().is_some_and(|envelope| {
        envelope.error.status.as_deref() == Some("RESOURCE_EXHAUSTED")
            || envelope
                .error
                .errors
                .iter()
                .any(|detail| detail.reason.ends_with("LimitExceeded"))
    });

    if status == StatusCode::TOO_MANY_REQUESTS || quota_reported {
        return ProviderError::QuotaExceeded(message);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ProviderError::Unauthorized(message);
    }

    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}
