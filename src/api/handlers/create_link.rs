//! Handler for the link creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from link metadata.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Tag: Item for 5 SWT",
///   "description": "Reply for 5 SWT on Tag",
///   "redirectUrl": "https://swarm.city/detail/0xABC/0xDEF"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "da49j0uB4umlgHSLf7n9"
/// }
/// ```
///
/// The id is derived from the payload content: posting the identical payload
/// again returns the identical id.
///
/// # Errors
///
/// Returns 400 Bad Request naming the offending field if `title`,
/// `description`, or `redirectUrl` is missing or empty.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    payload.validate()?;

    let record = LinkRecord::new(
        payload.title.unwrap_or_default(),
        payload.description.unwrap_or_default(),
        payload.redirect_url.unwrap_or_default(),
    );

    let id = state.link_service.create_link(record).await?;

    Ok(Json(CreateLinkResponse { id }))
}
