//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (search provider, chat platform).
//!
//! Implementations of these traits live in the adapter crates.

pub mod notifier;
pub mod services;

// Re-exports
pub use notifier::*;
pub use services::*;
