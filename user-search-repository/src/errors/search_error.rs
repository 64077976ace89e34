//! Search error types.
//!
//! This module defines the error types that can occur while indexing
//! documents into, or searching, a collection.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to set up the connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A record was malformed or could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The index request for a document could not be delivered.
    #[error("Index error for document {document_id}: {message}")]
    IndexError {
        document_id: String,
        message: String,
    },

    /// The engine answered an index request with a non-success status.
    #[error("Index request for document {document_id} failed with status {status}: {body}")]
    IndexRejected {
        document_id: String,
        status: u16,
        body: String,
    },

    /// The search request could not be delivered or its response read.
    #[error("Query error on collection {collection} for {query}: {message}")]
    QueryError {
        collection: String,
        query: String,
        message: String,
    },

    /// The engine answered a search request with a non-success status.
    #[error("Search on collection {collection} for {query} failed with status {status}: {body}")]
    SearchRejected {
        collection: String,
        query: String,
        status: u16,
        body: String,
    },

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an index error for the given document.
    pub fn index(document_id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::IndexError {
            document_id: document_id.into(),
            message: msg.into(),
        }
    }

    /// Create a query error for the given collection and query.
    pub fn query(
        collection: impl Into<String>,
        query: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::QueryError {
            collection: collection.into(),
            query: query.into(),
            message: msg.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// The document id this error refers to, if any.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::IndexError { document_id, .. } | Self::IndexRejected { document_id, .. } => {
                Some(document_id)
            }
            _ => None,
        }
    }

    /// The HTTP status the engine reported, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::IndexRejected { status, .. } | Self::SearchRejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
