//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod queries;

pub use client::OpenSearchClient;
pub use queries::build_match_query;
