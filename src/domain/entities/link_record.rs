//! Link record entity: the metadata stored behind a short id.

use serde::{Deserialize, Serialize};

/// Metadata for a shareable short link.
///
/// A record carries no identity of its own - its identity is the short id
/// derived from its canonical serialization. Two records with identical
/// fields are the same link.
///
/// The wire and storage encoding uses camelCase field names, matching the
/// public JSON contract (`redirectUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinkRecord {
    /// Human-readable link title shown in social previews.
    pub title: String,
    /// Longer description shown in social previews.
    pub description: String,
    /// Destination the visitor is redirected to. Expected to be a well-formed
    /// URL; well-formedness is the caller's responsibility, not checked here.
    pub redirect_url: String,
}

impl LinkRecord {
    /// Creates a new record.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            redirect_url: redirect_url.into(),
        }
    }

    /// Canonical byte serialization used as both hash input and stored value.
    ///
    /// Field order is fixed (`title`, `description`, `redirectUrl`) and the
    /// encoding is compact JSON with no extra whitespace, so the same logical
    /// record always yields the same bytes.
    pub fn canonical_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
