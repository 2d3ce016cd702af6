//! Test doubles for the ports
//!
//! In-memory [`SearchPageSource`] and [`Notifier`] implementations that
//! record every call, for exercising [`RankFinder`](crate::RankFinder) and
//! request handlers without a live provider or chat platform.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::entities::{Page, Query, RankRequest, Requester, ResultItem, PAGE_SIZE};
use crate::domain::errors::{DomainError, ProviderError};
use crate::domain::value_objects::Outcome;
use crate::ports::{Notifier, SearchPageSource};

/// Replays a fixed script of pages and errors, one entry per call.
///
/// The requested offset is echoed back as the page's `start_offset`.
/// Calls beyond the end of the script fail with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedPageSource {
    script: Mutex<VecDeque<Result<(Vec<ResultItem>, u64), ProviderError>>>,
    calls: Mutex<Vec<(Query, u64)>>,
}

impl ScriptedPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page with the given items and declared total
    pub fn with_page(self, items: Vec<ResultItem>, total_reported: u64) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok((items, total_reported)));
        self
    }

    /// Append a failing call
    pub fn with_error(self, error: ProviderError) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn requested_offsets(&self) -> Vec<u64> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, offset)| *offset)
            .collect()
    }

    pub fn requested_queries(&self) -> Vec<Query> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }
}

#[async_trait]
impl SearchPageSource for ScriptedPageSource {
    async fn fetch_page(&self, query: &Query, start_offset: u64) -> Result<Page, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((query.clone(), start_offset));

        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(Ok((items, total_reported))) => Ok(Page::new(items, start_offset, total_reported)),
            Some(Err(err)) => Err(err),
            None => Err(ProviderError::Transport(format!(
                "no scripted response for offset {}",
                start_offset
            ))),
        }
    }
}

/// Deterministic provider with a fixed result count.
///
/// Every position up to `total` is filled; the item at `match_at` (if set)
/// has a `https://target.example/<rank>` URL, all others point at
/// `https://filler.example/<rank>`.
#[derive(Debug)]
pub struct SyntheticProvider {
    total: u64,
    match_at: Option<u64>,
    fail_at_offset: Option<u64>,
    offsets: Mutex<Vec<u64>>,
}

impl SyntheticProvider {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            match_at: None,
            fail_at_offset: None,
            offsets: Mutex::new(Vec::new()),
        }
    }

    /// Place the target result at this absolute rank
    pub fn with_match_at(mut self, rank: u64) -> Self {
        self.match_at = Some(rank);
        self
    }

    /// Fail the fetch for the page starting at this offset
    pub fn with_failure_at(mut self, offset: u64) -> Self {
        self.fail_at_offset = Some(offset);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.offsets.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn requested_offsets(&self) -> Vec<u64> {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn item_at(&self, rank: u64) -> ResultItem {
        let host = if self.match_at == Some(rank) {
            "target.example"
        } else {
            "filler.example"
        };
        ResultItem::new(
            format!("https://{}/{}", host, rank),
            format!("Result {}", rank),
            format!("Snippet for result {}", rank),
        )
    }
}

#[async_trait]
impl SearchPageSource for SyntheticProvider {
    async fn fetch_page(&self, _query: &Query, start_offset: u64) -> Result<Page, ProviderError> {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(start_offset);

        if self.fail_at_offset == Some(start_offset) {
            return Err(ProviderError::Transport("connection reset by peer".into()));
        }

        let last = (start_offset + PAGE_SIZE - 1).min(self.total);
        let items = (start_offset..=last).map(|rank| self.item_at(rank)).collect();

        Ok(Page::new(items, start_offset, self.total))
    }
}

/// Provider whose fetches never complete.
///
/// Records each requested offset before stalling.
#[derive(Debug, Default)]
pub struct StalledPageSource {
    offsets: Mutex<Vec<u64>>,
}

impl StalledPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested_offsets(&self) -> Vec<u64> {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SearchPageSource for StalledPageSource {
    async fn fetch_page(&self, _query: &Query, start_offset: u64) -> Result<Page, ProviderError> {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(start_offset);
        std::future::pending().await
    }
}

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Started { chat_id: i64, text: String },
    User { chat_id: i64, outcome: Outcome },
    Operator { user_label: String, outcome: Outcome },
}

/// Notifier that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    fail_user: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `notify_user` fail after recording the attempt
    pub fn failing_user_delivery(mut self) -> Self {
        self.fail_user = true;
        self
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, notification: Notification) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_started(&self, request: &RankRequest) -> Result<(), DomainError> {
        self.record(Notification::Started {
            chat_id: request.requester.chat_id,
            text: request.text.clone(),
        });
        Ok(())
    }

    async fn notify_user(
        &self,
        requester: &Requester,
        outcome: &Outcome,
    ) -> Result<(), DomainError> {
        self.record(Notification::User {
            chat_id: requester.chat_id,
            outcome: outcome.clone(),
        });
        if self.fail_user {
            return Err(DomainError::ExternalService("user chat unreachable".into()));
        }
        Ok(())
    }

    async fn notify_operator_channel(
        &self,
        outcome: &Outcome,
        originating_user_label: &str,
    ) -> Result<(), DomainError> {
        self.record(Notification::Operator {
            user_label: originating_user_label.to_string(),
            outcome: outcome.clone(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_synthetic_provider_pages() {
        let provider = SyntheticProvider::new(25).with_match_at(12);
        let query = Query::new("q", "cx");

        let first = provider.fetch_page(&query, 1).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_reported, 25);

        let second = provider.fetch_page(&query, 11).await.unwrap();
        assert_eq!(second.items[1].url, "https://target.example/12");

        let third = provider.fetch_page(&query, 21).await.unwrap();
        assert_eq!(third.items.len(), 5);

        assert_eq!(provider.requested_offsets(), vec![1, 11, 21]);
    }

    #[tokio::test]
    async fn test_scripted_source_runs_out() {
        let source = ScriptedPageSource::new().with_page(vec![], 0);
        let query = Query::new("q", "cx");

        assert!(source.fetch_page(&query, 1).await.is_ok());
        assert!(matches!(
            source.fetch_page(&query, 11).await,
            Err(ProviderError::Transport(_))
        ));
        assert_eq!(source.fetch_count(), 2);
    }
}
