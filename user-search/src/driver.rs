//! Sequential driver: index, then search.

use std::fmt;

use tracing::{info, warn};

use crate::operations::{index_records, search_collection};
use crate::DemoError;
use user_search_repository::{RawSearchResponse, SearchEngineClient};
use user_search_shared::{MatchQuery, Record};

/// The stages of a run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Indexing,
    Search,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Indexing => write!(f, "indexing"),
            Stage::Search => write!(f, "search"),
        }
    }
}

/// Everything one demo program needs: where to write, what to write, and
/// what to look for afterwards.
#[derive(Debug, Clone)]
pub struct Scenario<R> {
    /// The collection both stages operate on.
    pub collection: String,
    /// Records to index.
    pub records: Vec<R>,
    /// The match filter to search with.
    pub query: MatchQuery,
}

impl<R: Record> Scenario<R> {
    pub fn new(collection: impl Into<String>, records: Vec<R>, query: MatchQuery) -> Self {
        Self {
            collection: collection.into(),
            records,
            query,
        }
    }
}

/// Index the scenario's records, then run its search.
///
/// Any failure ends the run with the stage it happened in. Documents
/// indexed before a failure stay in the collection.
pub async fn run<R: Record>(
    client: &dyn SearchEngineClient,
    scenario: &Scenario<R>,
) -> Result<RawSearchResponse, DemoError> {
    info!(
        collection = %scenario.collection,
        records = scenario.records.len(),
        "Starting indexing"
    );
    index_records(client, &scenario.collection, &scenario.records)
        .await
        .map_err(|source| {
            warn!(
                document_id = ?source.document_id(),
                status = ?source.status(),
                "Indexing stopped"
            );
            DemoError::StageFailed {
                stage: Stage::Indexing,
                source,
            }
        })?;

    info!(
        collection = %scenario.collection,
        field = %scenario.query.field,
        value = %scenario.query.value,
        "Starting search"
    );
    let response = search_collection(client, &scenario.collection, &scenario.query)
        .await
        .map_err(|source| {
            warn!(status = ?source.status(), "Search failed");
            DemoError::StageFailed {
                stage: Stage::Search,
                source,
            }
        })?;

    match response.total_hits() {
        Ok(total) => info!(total_hits = total, "Run complete"),
        Err(e) => warn!(error = %e, "Run complete, hit count unavailable"),
    }

    Ok(response)
}
