//! Notifier implementation for Telegram

use async_trait::async_trait;
use serprank::{DomainError, Notifier, Outcome, PageBudget, RankRequest, Requester};
use tracing::debug;

use crate::client::TelegramClient;
use crate::config::TelegramConfig;
use crate::format;

/// Telegram notifier implementing the Notifier port
pub struct TelegramNotifier {
    client: TelegramClient,
    budget: PageBudget,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: TelegramClient::new(config),
            budget: PageBudget::default(),
        }
    }

    /// Page budget quoted in "not found in the first N results" messages
    pub fn with_page_budget(mut self, budget: PageBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Bot API client shared with the update poller
    pub fn client(&self) -> &TelegramClient {
        &self.client
    }

    fn operator_chat_id(&self) -> i64 {
        self.client.config().operator_chat_id
    }

    async fn send(&self, chat_id: i64, text: &str) -> Result<(), DomainError> {
        self.client
            .send_message(chat_id, text)
            .await
            .map_err(|e| DomainError::ExternalService(format!("Telegram API error: {}", e)))
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify_started(&self, request: &RankRequest) -> Result<(), DomainError> {
        debug!(request_id = %request.id, "Acknowledging rank request");

        // The operator channel hears about the request even if the user's
        // chat is unreachable.
        let user = self
            .send(request.requester.chat_id, &format::format_pending())
            .await;
        let operator = self
            .send(
                self.operator_chat_id(),
                &format::format_operator_pending(&request.requester.label, &request.text),
            )
            .await;

        user.and(operator)
    }

    async fn notify_user(
        &self,
        requester: &Requester,
        outcome: &Outcome,
    ) -> Result<(), DomainError> {
        let text = format::format_user_message(outcome, self.budget);
        self.send(requester.chat_id, &text).await
    }

    async fn notify_operator_channel(
        &self,
        outcome: &Outcome,
        originating_user_label: &str,
    ) -> Result<(), DomainError> {
        let text = format::format_operator_message(outcome, originating_user_label, self.budget);
        self.send(self.operator_chat_id(), &text).await
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
