//! redb implementation of the link repository.

use async_trait::async_trait;
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_store_error};

/// Table holding canonical JSON record bytes keyed by short id.
const LINKS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("links_v1");

/// Embedded repository for link storage and retrieval.
///
/// Values are the canonical JSON serialization of [`LinkRecord`]; keys are the
/// derived short ids. redb commits with immediate durability, so a write is on
/// disk before `put` returns. Writes are serialized by the engine's single
/// writer while reads run concurrently against MVCC snapshots, which gives the
/// atomic single-key write guarantee the service relies on without any locking
/// in this layer.
///
/// redb's transaction API is blocking, so every operation is dispatched via
/// [`tokio::task::spawn_blocking`] and surfaced as an async result.
pub struct RedbLinkRepository {
    db: Arc<Database>,
}

impl RedbLinkRepository {
    /// Creates a new repository over an opened database, creating the links
    /// table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the table cannot be created.
    pub fn new(db: Arc<Database>) -> Result<Self, AppError> {
        let txn = db.begin_write().map_err(|e| map_store_error(e.into()))?;
        txn.open_table(LINKS_TABLE)
            .map_err(|e| map_store_error(e.into()))?;
        txn.commit().map_err(|e| map_store_error(e.into()))?;

        Ok(Self { db })
    }
}

#[async_trait]
impl LinkRepository for RedbLinkRepository {
    async fn put(&self, id: &str, record: &LinkRecord) -> Result<(), AppError> {
        let bytes = record.canonical_bytes().map_err(|e| {
            AppError::internal(
                "Failed to serialize record",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let db = self.db.clone();
        let id = id.to_string();

        spawn_store_task(move || {
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(LINKS_TABLE)?;
                table.insert(id.as_str(), bytes.as_slice())?;
            }
            txn.commit()?;

            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LinkRecord>, AppError> {
        let db = self.db.clone();
        let key = id.to_string();

        let bytes = spawn_store_task(move || {
            let txn = db.begin_read()?;
            let table = txn.open_table(LINKS_TABLE)?;

            Ok(table.get(key.as_str())?.map(|guard| guard.value().to_vec()))
        })
        .await?;

        match bytes {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes).map_err(|e| {
                    tracing::error!("Corrupt record under id {id}: {e}");
                    AppError::corrupt_record(
                        "Stored record could not be decoded",
                        json!({ "id": id }),
                    )
                })?;

                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64, AppError> {
        let db = self.db.clone();

        spawn_store_task(move || {
            let txn = db.begin_read()?;
            let table = txn.open_table(LINKS_TABLE)?;

            Ok(table.len()?)
        })
        .await
    }
}

/// Runs a blocking store operation on the blocking thread pool and maps
/// engine failures to [`AppError`].
async fn spawn_store_task<T, F>(task: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, redb::Error> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| {
            AppError::internal(
                "Store task panicked",
                json!({ "reason": e.to_string() }),
            )
        })?
        .map_err(map_store_error)
}
