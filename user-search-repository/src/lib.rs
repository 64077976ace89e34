//! # User Search Repository
//!
//! This crate provides the trait the demo programs use to talk to the
//! search engine, the errors it reports, and a concrete implementation
//! for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::OpenSearchClient;
pub use types::{IndexedDocument, RawSearchResponse};
