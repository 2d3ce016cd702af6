//! MatchRecord Entity

use serde::{Deserialize, Serialize};

use super::ResultItem;

/// The first result that satisfied the match predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based absolute position across all pages
    pub rank: u64,
    pub item: ResultItem,
}

impl MatchRecord {
    pub fn new(rank: u64, item: ResultItem) -> Self {
        Self { rank, item }
    }
}
