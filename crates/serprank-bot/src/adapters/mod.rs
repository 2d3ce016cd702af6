//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod google_cse;

// Re-exports
pub use google_cse::GoogleCsePageSource;
