//! Search Page Source Port
//!
//! Abstract interface over a paginated web search provider.

use async_trait::async_trait;

use crate::domain::entities::{Page, Query};
use crate::domain::errors::ProviderError;

/// One page of provider results per call.
///
/// Implementations must:
/// - return items in the provider's rank order for the requested window,
/// - report the provider's current estimate of the total result count,
/// - lower `total_reported` rather than silently truncating when the
///   provider has fewer results than the window suggests.
///
/// Authentication, transport, quota and decoding problems are all mapped
/// into [`ProviderError`]. Dropping the returned future must abort the
/// in-flight request.
///
/// # Example
///
/// ```rust,ignore
/// use serprank::ports::SearchPageSource;
///
/// struct GoogleCsePageSource { /* reqwest client */ }
///
/// #[async_trait]
/// impl SearchPageSource for GoogleCsePageSource {
///     async fn fetch_page(&self, query: &Query, start_offset: u64)
///         -> Result<Page, ProviderError>
///     {
///         // GET /customsearch/v1?cx=...&q=...&start=...
///     }
/// }
/// ```
#[async_trait]
pub trait SearchPageSource: Send + Sync {
    /// Fetch the page whose first result sits at `start_offset` (1-based).
    async fn fetch_page(&self, query: &Query, start_offset: u64) -> Result<Page, ProviderError>;
}
