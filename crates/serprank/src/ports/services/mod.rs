//! Service Ports
//!
//! Abstract interfaces for external services.

mod search_page_source;

pub use search_page_source::*;
