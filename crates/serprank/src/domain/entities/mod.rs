//! Domain Entities
//!
//! Values created fresh for each rank search and discarded once the
//! outcome has been delivered.
//! - Query: what to search and where
//! - ResultItem / Page: what the provider returned
//! - MatchRecord: the first matching result and its rank
//! - RankRequest / Requester: an inbound request and who sent it

mod match_record;
mod page;
mod query;
mod request;
mod result_item;

pub use match_record::*;
pub use page::*;
pub use query::*;
pub use request::*;
pub use result_item::*;
