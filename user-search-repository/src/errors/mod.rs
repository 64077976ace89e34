//! Error types for the user search repository.

mod search_error;

pub use search_error::SearchError;
