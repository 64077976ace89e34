//! Response types for search engine operations.

use serde_json::Value;

use crate::errors::SearchError;

/// Outcome of a successful index request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    /// The id the document was stored under.
    pub document_id: String,
    /// HTTP status returned by the engine.
    pub status: u16,
}

/// A search response exactly as the engine returned it.
///
/// Hits are not decoded back into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSearchResponse {
    /// HTTP status returned by the engine.
    pub status: u16,
    /// The response body text.
    pub body: String,
}

impl RawSearchResponse {
    /// Read `hits.total` from the response envelope.
    ///
    /// Accepts both the object form (`{"value": 2, "relation": "eq"}`) and
    /// the bare integer form older engines return.
    pub fn total_hits(&self) -> Result<u64, SearchError> {
        let body: Value =
            serde_json::from_str(&self.body).map_err(|e| SearchError::parse(e.to_string()))?;

        let total = body
            .get("hits")
            .and_then(|h| h.get("total"))
            .ok_or_else(|| SearchError::parse("response has no hits.total"))?;

        total
            .as_u64()
            .or_else(|| total.get("value").and_then(|v| v.as_u64()))
            .ok_or_else(|| SearchError::parse(format!("unexpected hits.total: {}", total)))
    }
}
