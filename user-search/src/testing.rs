//! In-memory search engine used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use user_search_repository::{IndexedDocument, RawSearchResponse, SearchEngineClient, SearchError};

struct StoredDocument {
    collection: String,
    id: String,
    source: Value,
}

/// Stores documents in a vector and answers single-field match queries by
/// exact equality.
#[derive(Default)]
pub struct InMemoryEngine {
    documents: Mutex<Vec<StoredDocument>>,
    index_calls: Mutex<Vec<String>>,
    search_calls: Mutex<usize>,
    reject_index_call: Option<(usize, u16)>,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the index call at `position` (0-based) with `status`.
    pub fn rejecting_index_call(position: usize, status: u16) -> Self {
        Self {
            reject_index_call: Some((position, status)),
            ..Self::default()
        }
    }

    /// Document ids of every index call received, in order.
    pub fn index_calls(&self) -> Vec<String> {
        self.index_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        *self.search_calls.lock().unwrap()
    }

    /// Sources of the documents stored in a collection.
    pub fn documents(&self, collection: &str) -> Vec<Value> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection)
            .map(|d| d.source.clone())
            .collect()
    }
}

#[async_trait]
impl SearchEngineClient for InMemoryEngine {
    async fn index_document(
        &self,
        collection: &str,
        document_id: &str,
        body: Value,
    ) -> Result<IndexedDocument, SearchError> {
        let position = {
            let mut calls = self.index_calls.lock().unwrap();
            calls.push(document_id.to_string());
            calls.len() - 1
        };

        if let Some((reject_at, status)) = self.reject_index_call {
            if reject_at == position {
                return Err(SearchError::IndexRejected {
                    document_id: document_id.to_string(),
                    status,
                    body: "{\"error\":\"rejected\"}".to_string(),
                });
            }
        }

        self.documents.lock().unwrap().push(StoredDocument {
            collection: collection.to_string(),
            id: document_id.to_string(),
            source: body,
        });

        Ok(IndexedDocument {
            document_id: document_id.to_string(),
            status: 201,
        })
    }

    async fn search(
        &self,
        collection: &str,
        body: &Value,
    ) -> Result<RawSearchResponse, SearchError> {
        *self.search_calls.lock().unwrap() += 1;

        let (field, value) = body["query"]["match"]
            .as_object()
            .and_then(|m| m.iter().next())
            .ok_or_else(|| SearchError::query(collection, body.to_string(), "unsupported query"))?;

        let hits: Vec<Value> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection && &d.source[field] == value)
            .map(|d| {
                json!({
                    "_index": collection,
                    "_id": d.id,
                    "_score": 1.0,
                    "_source": d.source
                })
            })
            .collect();

        let response = json!({
            "took": 1,
            "timed_out": false,
            "hits": {
                "total": { "value": hits.len(), "relation": "eq" },
                "hits": hits
            }
        });

        Ok(RawSearchResponse {
            status: 200,
            body: serde_json::to_string_pretty(&response).unwrap(),
        })
    }
}
