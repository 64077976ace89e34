//! The two operations each demo program performs, in order.

mod indexing;
mod search;

pub use indexing::index_records;
pub use search::search_collection;
