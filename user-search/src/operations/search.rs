//! Search operation.

use tracing::{info, instrument};

use user_search_repository::{
    opensearch::build_match_query, RawSearchResponse, SearchEngineClient, SearchError,
};
use user_search_shared::MatchQuery;

/// Run a single match filter against `collection` and return the raw response.
///
/// The response is not decoded into records.
#[instrument(skip(client))]
pub async fn search_collection(
    client: &dyn SearchEngineClient,
    collection: &str,
    query: &MatchQuery,
) -> Result<RawSearchResponse, SearchError> {
    let body = build_match_query(query);
    let response = client.search(collection, &body).await?;

    info!(status = response.status, "Search completed");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::index_records;
    use crate::testing::InMemoryEngine;
    use serde_json::Value;
    use user_search_shared::sample_users;

    fn matched_user_ids(response: &RawSearchResponse) -> Vec<String> {
        let body: Value = serde_json::from_str(&response.body).unwrap();
        let mut ids: Vec<String> = body["hits"]["hits"]
            .as_array()
            .unwrap()
            .iter()
            .map(|hit| hit["_source"]["id"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_owner_filter_matches_two_users() {
        let engine = InMemoryEngine::new();
        index_records(&engine, "user", &sample_users()).await.unwrap();

        let response = search_collection(&engine, "user", &MatchQuery::new("owner_id", "ch1"))
            .await
            .unwrap();

        assert_eq!(response.total_hits().unwrap(), 2);
        assert_eq!(matched_user_ids(&response), vec!["u1", "u2"]);
    }

    #[tokio::test]
    async fn test_search_sees_duplicates_after_reindex() {
        let engine = InMemoryEngine::new();
        index_records(&engine, "user", &sample_users()).await.unwrap();
        index_records(&engine, "user", &sample_users()).await.unwrap();

        let response = search_collection(&engine, "user", &MatchQuery::new("owner_id", "ch1"))
            .await
            .unwrap();

        assert_eq!(response.total_hits().unwrap(), 4);
        assert_eq!(matched_user_ids(&response), vec!["u1", "u1", "u2", "u2"]);
    }

    #[tokio::test]
    async fn test_search_is_scoped_to_collection() {
        let engine = InMemoryEngine::new();
        index_records(&engine, "user", &sample_users()).await.unwrap();

        let response = search_collection(&engine, "other", &MatchQuery::new("owner_id", "ch1"))
            .await
            .unwrap();

        assert_eq!(response.total_hits().unwrap(), 0);
    }
}
