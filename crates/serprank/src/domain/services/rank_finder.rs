//! RankFinder - walks provider pages until a result matches
//!
//! Pages are fetched strictly one after another in ascending offset
//! order: whether page N+1 is needed at all depends on page N.

use std::sync::Arc;

use crate::domain::entities::{MatchRecord, Query, PAGE_SIZE};
use crate::domain::value_objects::{Outcome, PageBudget};
use crate::ports::SearchPageSource;

use super::MatchPredicate;

/// Finds the rank of the first result satisfying a predicate.
///
/// Holds no state between calls; one `RankFinder` may serve any number of
/// concurrent searches.
pub struct RankFinder<S: SearchPageSource + ?Sized> {
    source: Arc<S>,
}

impl<S: SearchPageSource + ?Sized> RankFinder<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Run one search and classify how it ended.
    ///
    /// At most `budget` result positions are inspected. A fetch error ends
    /// the search immediately with [`Outcome::Failed`]; nothing is retried.
    /// Dropping the future cancels the in-flight fetch and produces no
    /// outcome.
    pub async fn find<P>(&self, query: &Query, predicate: &P, budget: PageBudget) -> Outcome
    where
        P: MatchPredicate + ?Sized,
    {
        let budget = budget.get();
        let mut offset: u64 = 1;

        while offset <= budget {
            let page = match self.source.fetch_page(query, offset).await {
                Ok(page) => page,
                Err(err) => return Outcome::Failed(err),
            };

            // Positions past the budget are never inspected.
            let window = (budget - offset + 1).min(PAGE_SIZE) as usize;
            let hit = page
                .items
                .into_iter()
                .take(window)
                .enumerate()
                .find(|(_, item)| predicate.matches(item));

            if let Some((index, item)) = hit {
                return Outcome::Found(MatchRecord::new(offset + index as u64, item));
            }

            let next = offset + PAGE_SIZE;

            // The provider's total is re-read on every page; it is not
            // assumed to be monotonic.
            if page.total_reported < next.min(budget) {
                return Outcome::NotFound;
            }

            offset = next;
        }

        Outcome::LimitExhausted
    }
}

impl<S: SearchPageSource + ?Sized> Clone for RankFinder<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}
