//! Request handling: one inbound request, one search, two notifications

use std::sync::Arc;

use serprank::{
    Notifier, Outcome, PageBudget, Query, RankFinder, RankRequest, SearchPageSource, UrlContains,
};
use tracing::{info, warn};

/// Runs a rank search for each inbound request and relays the outcome
pub struct RequestHandler<S: SearchPageSource + ?Sized> {
    finder: RankFinder<S>,
    notifier: Arc<dyn Notifier>,
    site_scope: String,
    predicate: UrlContains,
    budget: PageBudget,
}

impl<S: SearchPageSource + ?Sized> RequestHandler<S> {
    pub fn new(
        finder: RankFinder<S>,
        notifier: Arc<dyn Notifier>,
        site_scope: impl Into<String>,
        predicate: UrlContains,
        budget: PageBudget,
    ) -> Self {
        Self {
            finder,
            notifier,
            site_scope: site_scope.into(),
            predicate,
            budget,
        }
    }

    /// Handle one request
    ///
    /// Delivery failures are logged and do not affect the returned outcome.
    pub async fn handle(&self, request: &RankRequest) -> Outcome {
        info!(
            request_id = %request.id,
            chat_id = %request.requester.chat_id,
            user = %request.requester.label,
            query = %request.text,
            "Rank request received"
        );

        if let Err(e) = self.notifier.notify_started(request).await {
            warn!(request_id = %request.id, error = %e, "Failed to acknowledge request");
        }

        let query = Query::new(request.text.clone(), self.site_scope.clone());
        let outcome = self.finder.find(&query, &self.predicate, self.budget).await;

        match &outcome {
            Outcome::Failed(err) => warn!(
                request_id = %request.id,
                error = %err,
                "Search provider failed"
            ),
            _ => info!(
                request_id = %request.id,
                outcome = outcome.kind(),
                rank = ?outcome.match_record().map(|record| record.rank),
                "Rank search finished"
            ),
        }

        if let Err(e) = self
            .notifier
            .notify_user(&request.requester, &outcome)
            .await
        {
            warn!(
                request_id = %request.id,
                notifier = self.notifier.name(),
                error = %e,
                "Failed to notify user"
            );
        }

        if let Err(e) = self
            .notifier
            .notify_operator_channel(&outcome, &request.requester.label)
            .await
        {
            warn!(
                request_id = %request.id,
                notifier = self.notifier.name(),
                error = %e,
                "Failed to notify operator channel"
            );
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serprank::testing::{
        Notification, RecordingNotifier, StalledPageSource, SyntheticProvider,
    };
    use serprank::{ProviderError, Requester};

    fn handler(
        provider: SyntheticProvider,
        notifier: Arc<RecordingNotifier>,
        target: &str,
    ) -> (RequestHandler<SyntheticProvider>, Arc<SyntheticProvider>) {
        let provider = Arc::new(provider);
        let handler = RequestHandler::new(
            RankFinder::new(provider.clone()),
            notifier,
            "cx-7",
            UrlContains::new(target),
            PageBudget::default(),
        );
        (handler, provider)
    }

    #[tokio::test]
    async fn test_found_is_relayed_to_user_and_operator() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (handler, provider) = handler(
            SyntheticProvider::new(500).with_match_at(33),
            notifier.clone(),
            "target.example",
        );
        let request = RankRequest::new(Requester::new(10, "ana_k"), "pizza oven");

        let outcome = handler.handle(&request).await;

        assert_eq!(outcome.match_record().map(|r| r.rank), Some(33));
        assert_eq!(provider.fetch_count(), 4);
        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Started {
                    chat_id: 10,
                    text: "pizza oven".into()
                },
                Notification::User {
                    chat_id: 10,
                    outcome: outcome.clone()
                },
                Notification::Operator {
                    user_label: "ana_k".into(),
                    outcome
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_is_still_delivered() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (handler, _) = handler(
            SyntheticProvider::new(500).with_failure_at(1),
            notifier.clone(),
            "target.example",
        );
        let request = RankRequest::new(Requester::new(10, "ana_k"), "pizza oven");

        let outcome = handler.handle(&request).await;

        assert_eq!(
            outcome,
            Outcome::Failed(ProviderError::Transport("connection reset by peer".into()))
        );
        assert_eq!(notifier.notifications().len(), 3);
    }

    #[tokio::test]
    async fn test_user_delivery_failure_still_reaches_operator() {
        let notifier = Arc::new(RecordingNotifier::new().failing_user_delivery());
        let (handler, _) = handler(SyntheticProvider::new(3), notifier.clone(), "target.example");
        let request = RankRequest::new(Requester::new(10, "ana_k"), "pizza oven");

        let outcome = handler.handle(&request).await;

        assert_eq!(outcome, Outcome::NotFound);
        assert!(matches!(
            notifier.notifications().last(),
            Some(Notification::Operator { user_label, .. }) if user_label == "ana_k"
        ));
    }

    #[tokio::test]
    async fn test_abandoned_request_sends_no_outcome() {
        let notifier = Arc::new(RecordingNotifier::new());
        let source = Arc::new(StalledPageSource::new());
        let handler = RequestHandler::new(
            RankFinder::new(source.clone()),
            notifier.clone(),
            "cx-7",
            UrlContains::new("target.example"),
            PageBudget::default(),
        );
        let request = RankRequest::new(Requester::new(10, "ana_k"), "pizza oven");

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            handler.handle(&request),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(source.requested_offsets(), vec![1]);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::Started {
                chat_id: 10,
                text: "pizza oven".into()
            }]
        );
    }
}
