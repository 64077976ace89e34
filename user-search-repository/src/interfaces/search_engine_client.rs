//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the two operations the
//! demo programs perform against a collection: submitting a document and
//! running a search.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::types::{IndexedDocument, RawSearchResponse};

/// Abstract interface for search engine operations.
///
/// Implementations can be swapped for different backends (OpenSearch, an
/// in-memory fake in tests).
///
/// # Error Handling
///
/// A non-success status from the engine is an error, never a successful
/// return with a bad status inside.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Submit a new document to a collection under the given id.
    ///
    /// The collection is refreshed before the call returns, so the document
    /// is visible to the next search.
    ///
    /// # Arguments
    ///
    /// * `collection` - The collection to write into
    /// * `document_id` - The id the document is stored under
    /// * `body` - The serialized record
    ///
    /// # Returns
    ///
    /// * `Ok(IndexedDocument)` - The stored id and the engine's status
    /// * `Err(SearchError::IndexError)` - If the request could not be delivered
    /// * `Err(SearchError::IndexRejected)` - If the engine reported a failure
    async fn index_document(
        &self,
        collection: &str,
        document_id: &str,
        body: Value,
    ) -> Result<IndexedDocument, SearchError>;

    /// Run a search against a collection and return the raw response.
    ///
    /// The total hit count is computed exactly and the body is pretty-printed.
    ///
    /// # Arguments
    ///
    /// * `collection` - The collection to search
    /// * `body` - The full query body, e.g. `{"query": {"match": {...}}}`
    ///
    /// # Returns
    ///
    /// * `Ok(RawSearchResponse)` - The status and unparsed body
    /// * `Err(SearchError)` - If the request fails or the engine rejects it
    async fn search(
        &self,
        collection: &str,
        body: &Value,
    ) -> Result<RawSearchResponse, SearchError>;
}
