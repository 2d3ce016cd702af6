//! Outcome - the terminal result of one rank search

use crate::domain::entities::MatchRecord;
use crate::domain::errors::ProviderError;

/// Result of a single rank search.
///
/// Every variant is an ordinary return value. `NotFound` and
/// `LimitExhausted` are business outcomes, not failures; only `Failed`
/// means the provider interrupted the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A result matched; carries its absolute rank
    Found(MatchRecord),
    /// The provider declared its results exhausted without a match
    NotFound,
    /// The page budget ran out before the provider declared completion
    LimitExhausted,
    /// A page fetch failed and the search was abandoned
    Failed(ProviderError),
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The match, if any
    pub fn match_record(&self) -> Option<&MatchRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Stable label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::LimitExhausted => "limit_exhausted",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(record) => write!(f, "found at rank {}: {}", record.rank, record.item.url),
            Self::NotFound => write!(f, "not found"),
            Self::LimitExhausted => write!(f, "page budget exhausted"),
            Self::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}
