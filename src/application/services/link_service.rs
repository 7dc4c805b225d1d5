//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_id::derive_id;
use serde_json::json;

/// Service for creating and retrieving short links.
///
/// Creation is content-addressed: the id is derived from the canonical
/// serialization of the record, then the record is written under that id
/// unconditionally. Submitting the identical payload twice yields the same id
/// and rewrites identical bytes, so re-creation never errors. No uniqueness
/// check runs between derivation and storage.
pub struct LinkService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link and returns its derived id.
    ///
    /// # Validation
    ///
    /// `title`, `description`, and `redirectUrl` must all be non-empty. On
    /// failure nothing is written. The redirect URL's well-formedness is not
    /// checked - producing a sane value is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the offending field if any
    /// required field is empty.
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_link(&self, record: LinkRecord) -> Result<String, AppError> {
        validate_record(&record)?;

        let bytes = record.canonical_bytes().map_err(|e| {
            AppError::internal(
                "Failed to serialize record",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let id = derive_id(&bytes);

        self.link_repository.put(&id, &record).await?;

        Ok(id)
    }

    /// Retrieves a link record by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record is stored under `id`.
    /// Returns [`AppError::CorruptRecord`] if stored bytes cannot be decoded.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_link(&self, id: &str) -> Result<LinkRecord, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn count_links(&self) -> Result<u64, AppError> {
        self.link_repository.count().await
    }
}

/// Validation gate in front of derivation and storage.
///
/// Requires `title`, `description`, and `redirectUrl` to be non-empty and
/// reports the first offending field.
fn validate_record(record: &LinkRecord) -> Result<(), AppError> {
    let fields = [
        ("title", &record.title),
        ("description", &record.description),
        ("redirectUrl", &record.redirect_url),
    ];

    for (field, value) in fields {
        if value.is_empty() {
            return Err(AppError::bad_request(
                format!("Field '{field}' is required"),
                json!({ "field": field }),
            ));
        }
    }

    Ok(())
}
