//! Page Entity
//!
//! One window of provider results starting at a 1-based offset.

use serde::{Deserialize, Serialize};

use super::ResultItem;

/// Number of results the provider returns per page.
pub const PAGE_SIZE: u64 = 10;

/// A fetched page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Results in provider rank order
    pub items: Vec<ResultItem>,
    /// Absolute 1-based position of the first item
    pub start_offset: u64,
    /// Provider's estimate of the total number of results, as of this page.
    /// May be revised from one page to the next.
    pub total_reported: u64,
}

impl Page {
    pub fn new(items: Vec<ResultItem>, start_offset: u64, total_reported: u64) -> Self {
        Self {
            items,
            start_offset,
            total_reported,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
