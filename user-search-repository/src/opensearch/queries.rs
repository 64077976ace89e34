//! OpenSearch query builders.

use serde_json::{json, Map, Value};

use user_search_shared::MatchQuery;

/// Build the request body for a single match filter.
///
/// Produces `{"query": {"match": {<field>: <value>}}}`.
pub fn build_match_query(query: &MatchQuery) -> Value {
    let mut condition = Map::new();
    condition.insert(query.field.clone(), Value::String(query.value.clone()));

    json!({
        "query": {
            "match": condition
        }
    })
}
