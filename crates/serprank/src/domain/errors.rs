//! Domain Errors
//!
//! Error types for domain operations and for the search provider boundary.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

/// Failure reported by a search provider adapter.
///
/// Adapters fold every transport, authentication, quota and decoding
/// problem into one of these variants. The rank finder treats them all
/// the same way: the search stops and the error becomes the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Human-readable reason without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(msg)
            | Self::Unauthorized(msg)
            | Self::QuotaExceeded(msg)
            | Self::MalformedResponse(msg) => msg,
            Self::Api { message, .. } => message,
        }
    }
}
