//! Query Entity

use serde::{Deserialize, Serialize};

/// A search to run against one provider-side search scope.
///
/// Neither field is normalized: the text is sent exactly as the user typed
/// it, and the scope is passed through as the provider's engine identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// User-supplied search string
    pub text: String,
    /// Provider-side search engine / collection identifier
    pub site_scope: String,
}

impl Query {
    pub fn new(text: impl Into<String>, site_scope: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            site_scope: site_scope.into(),
        }
    }
}
