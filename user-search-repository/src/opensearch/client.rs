//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    params::{Refresh, TrackTotalHits},
    IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::types::{IndexedDocument, RawSearchResponse};

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200")?;
/// client
///     .index_document("user", &Uuid::new_v4().to_string(), json!({"name": "Alice"}))
///     .await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or transport setup fails
    pub fn new(url: &str) -> Result<Self, SearchError> {
        Self::build(url, None)
    }

    /// Create a new OpenSearch client that authenticates with HTTP basic auth.
    pub fn with_basic_auth(url: &str, username: &str, password: &str) -> Result<Self, SearchError> {
        Self::build(
            url,
            Some(Credentials::Basic(username.to_string(), password.to_string())),
        )
    }

    fn build(url: &str, credentials: Option<Credentials>) -> Result<Self, SearchError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        let authenticated = credentials.is_some();
        if let Some(credentials) = credentials {
            builder = builder.auth(credentials);
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(url = %url, authenticated, "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self, body))]
    async fn index_document(
        &self,
        collection: &str,
        document_id: &str,
        body: Value,
    ) -> Result<IndexedDocument, SearchError> {
        let response = self
            .client
            .index(IndexParts::IndexId(collection, document_id))
            .refresh(Refresh::True)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::index(document_id, e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchError::IndexRejected {
                document_id: document_id.to_string(),
                status: status.as_u16(),
                body: error_body,
            });
        }

        debug!(status = %status, "Document indexed");
        Ok(IndexedDocument {
            document_id: document_id.to_string(),
            status: status.as_u16(),
        })
    }

    #[instrument(skip(self, body))]
    async fn search(
        &self,
        collection: &str,
        body: &Value,
    ) -> Result<RawSearchResponse, SearchError> {
        let query = body.to_string();
        let response = self
            .client
            .search(SearchParts::Index(&[collection]))
            .track_total_hits(TrackTotalHits::Track(true))
            .pretty(true)
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::query(collection, query.as_str(), e.to_string()))?;

        let status = response.status_code();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::query(collection, query.as_str(), e.to_string()))?;

        if !status.is_success() {
            error!(status = %status, query = %query, body = %text, "Search request failed");
            return Err(SearchError::SearchRejected {
                collection: collection.to_string(),
                query,
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(status = %status, bytes = text.len(), "Search completed");
        Ok(RawSearchResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}
