//! Notifier Port
//!
//! Abstract interface for relaying search outcomes to a messaging
//! platform: once to the user who asked, once to the operator channel.
//!
//! Turning an [`Outcome`] into platform text is the implementation's job.

use async_trait::async_trait;

use crate::domain::entities::{RankRequest, Requester};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Outcome;

/// Outcome delivery interface
///
/// # Example
///
/// ```rust,ignore
/// use serprank::ports::Notifier;
///
/// struct TelegramNotifier { /* ... */ }
///
/// #[async_trait]
/// impl Notifier for TelegramNotifier {
///     async fn notify_user(&self, requester: &Requester, outcome: &Outcome)
///         -> Result<(), DomainError>
///     {
///         // sendMessage to requester.chat_id
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Acknowledge that a search has started
    ///
    /// Sent before the first page is fetched so the user knows
    /// the request was received. Does nothing unless overridden.
    async fn notify_started(&self, _request: &RankRequest) -> Result<(), DomainError> {
        Ok(())
    }

    /// Deliver the outcome to the user who asked
    async fn notify_user(&self, requester: &Requester, outcome: &Outcome)
        -> Result<(), DomainError>;

    /// Mirror the outcome into the operator channel
    async fn notify_operator_channel(
        &self,
        outcome: &Outcome,
        originating_user_label: &str,
    ) -> Result<(), DomainError>;

    /// Get the platform name (e.g., "telegram")
    fn name(&self) -> &str;
}
