//! serprank Domain Library
//!
//! Finds the rank at which a target site first appears in a search
//! provider's results for a query, scanning at most a fixed number of
//! result pages.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Query, ResultItem, Page, MatchRecord, RankRequest
//!   - `value_objects/`: Outcome, PageBudget
//!   - `services/`: RankFinder and match predicates
//!   - `errors/`: Domain and provider error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Search provider interface
//!   - `notifier`: Outcome delivery to a messaging platform
//!
//! - **Testing** (`testing`, behind the `testing` feature): In-memory port
//!   implementations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serprank::{PageBudget, Query, RankFinder, UrlContains};
//!
//! let finder = RankFinder::new(Arc::new(source));
//! let outcome = finder
//!     .find(
//!         &Query::new("rust web framework", cx),
//!         &UrlContains::new("example.com"),
//!         PageBudget::default(),
//!     )
//!     .await;
//! ```

pub mod domain;
pub mod ports;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use domain::{
    DomainError, MatchPredicate, MatchRecord, Outcome, Page, PageBudget, ProviderError, Query,
    RankFinder, RankRequest, Requester, ResultItem, UrlContains, PAGE_SIZE,
};
pub use ports::{Notifier, SearchPageSource};
