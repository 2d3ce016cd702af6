//! Value Objects
//!
//! Immutable domain values with validation and behavior.

mod outcome;
mod page_budget;

pub use outcome::*;
pub use page_budget::*;
