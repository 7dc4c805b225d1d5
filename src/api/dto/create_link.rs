//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// Fields are optional at the deserialization level so that a missing field
/// and an empty field surface the same validation error instead of a generic
/// JSON rejection; the validation gate requires all three to be present and
/// non-empty.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Link title shown in social previews.
    #[validate(required(message = "title must be provided"))]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    /// Link description shown in social previews.
    #[validate(required(message = "description must be provided"))]
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    /// Destination URL. Well-formedness is the caller's responsibility.
    #[validate(required(message = "redirectUrl must be provided"))]
    #[validate(length(min = 1, message = "redirectUrl must not be empty"))]
    pub redirect_url: Option<String>,
}

/// Response carrying the derived short id.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub id: String,
}
