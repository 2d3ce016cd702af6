//! Match predicates applied to each result item

use crate::domain::entities::ResultItem;

/// Decides whether a result item is the one being looked for.
///
/// Closures of the form `|item: &ResultItem| -> bool` implement this
/// trait, so ad-hoc rules need no wrapper type.
pub trait MatchPredicate: Send + Sync {
    fn matches(&self, item: &ResultItem) -> bool;
}

impl<F> MatchPredicate for F
where
    F: Fn(&ResultItem) -> bool + Send + Sync,
{
    fn matches(&self, item: &ResultItem) -> bool {
        self(item)
    }
}

/// Case-sensitive substring test against the literal result URL.
///
/// No scheme stripping or trailing-slash handling is done. An empty
/// needle matches every URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlContains(String);

impl UrlContains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self(needle.into())
    }

    pub fn needle(&self) -> &str {
        &self.0
    }
}

impl MatchPredicate for UrlContains {
    fn matches(&self, item: &ResultItem) -> bool {
        item.url.contains(self.0.as_str())
    }
}
