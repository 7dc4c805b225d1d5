//! Handler for the service banner.

/// Returns a plain-text service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "Shortlink service"
}
