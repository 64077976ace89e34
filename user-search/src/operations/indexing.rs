//! Indexing operation.
//!
//! Submits each record as a new document under a freshly generated id,
//! refreshing the collection so the following search sees it.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use user_search_repository::{SearchEngineClient, SearchError};
use user_search_shared::Record;

/// Index every record into `collection`, stopping at the first failure.
///
/// Each record gets a random UUIDv4 document id, unrelated to any id field
/// inside the record. Running this twice stores every record twice.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The document ids assigned, in record order
/// * `Err(SearchError::SerializationError)` - If a record is malformed
/// * `Err(SearchError)` - If the engine could not be reached or rejected a document
#[instrument(skip(client, records), fields(record_count = records.len()))]
pub async fn index_records<R: Record>(
    client: &dyn SearchEngineClient,
    collection: &str,
    records: &[R],
) -> Result<Vec<String>, SearchError> {
    let mut document_ids = Vec::with_capacity(records.len());

    for record in records {
        record.validate().map_err(SearchError::serialization)?;
        let body = serde_json::to_value(record)
            .map_err(|e| SearchError::serialization(format!("failed to serialize record: {}", e)))?;

        let document_id = Uuid::new_v4().to_string();
        let indexed = client.index_document(collection, &document_id, body).await?;

        debug!(
            document_id = %indexed.document_id,
            status = indexed.status,
            "Record indexed"
        );
        document_ids.push(indexed.document_id);
    }

    info!(count = document_ids.len(), "Indexed records");
    Ok(document_ids)
}
