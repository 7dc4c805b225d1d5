//! Handler for the social-share link page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Template for the link page.
///
/// Renders `templates/redirect.html` with:
/// - Social meta tags (Open Graph, Twitter card) built from the stored record
/// - An `http-equiv="refresh"` redirect to the destination URL
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
struct RedirectTemplate {
    title: String,
    description: String,
    redirect_url: String,
    image_url: String,
    host: String,
    short_link_key: String,
}

/// Serves the HTML page for a short link.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Fetch the record stored under `id`
/// 2. Extract the host from the `Host` header
/// 3. Render the share page; crawlers read the meta tags, browsers follow
///    the immediate refresh redirect to the stored destination URL
///
/// # Errors
///
/// Returns 404 Not Found if the id has no stored record.
/// Returns 400 Bad Request if the `Host` header is missing or invalid.
/// Returns 500 if the stored bytes cannot be decoded.
pub async fn link_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let record = state.link_service.get_link(&id).await?;

    let host = extract_host_from_headers(&headers)?;
    let image_url = format!("https://{}/static/{}", host, state.image_name);

    Ok(RedirectTemplate {
        title: record.title,
        description: record.description,
        redirect_url: record.redirect_url,
        image_url,
        host,
        short_link_key: id,
    })
}
