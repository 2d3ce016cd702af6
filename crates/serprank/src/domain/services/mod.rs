//! Domain Services
//!
//! Logic that spans several entities and talks to ports.

mod predicate;
mod rank_finder;

pub use predicate::*;
pub use rank_finder::*;
