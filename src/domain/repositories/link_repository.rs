//! Repository trait for short link data access.

use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable id -> record mapping.
///
/// The store is a plain key-value contract: each logical operation touches
/// exactly one key and requires no cross-key coordination. Writes overwrite
/// unconditionally - ids are content-derived, so rewriting an existing key
/// either stores identical bytes (idempotent re-create) or reflects a
/// derivation collision that is deliberately not guarded against.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedbLinkRepository`] - embedded redb store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Writes a record under the given id, overwriting any existing value.
    ///
    /// The write is durable before `Ok` is returned; there is no buffering
    /// that could lose an acknowledged write across a crash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage engine errors.
    async fn put(&self, id: &str, record: &LinkRecord) -> Result<(), AppError>;

    /// Finds a record by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if no value is stored under `id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CorruptRecord`] if bytes exist under `id` but
    /// cannot be deserialized into a [`LinkRecord`].
    /// Returns [`AppError::Internal`] on storage engine errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Counts stored records.
    ///
    /// Used by the health endpoint to exercise the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage engine errors.
    async fn count(&self) -> Result<u64, AppError>;
}
