//! Validated search query text.

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty search query.
///
/// The only way to obtain one is through [`SearchQuery::parse`], so holding a
/// `SearchQuery` is proof that a fetch for it is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parse raw input into a query.
    ///
    /// Leading and trailing whitespace is removed; input that is empty after
    /// trimming is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query, returning the owned text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
