//! Shared application state injected into all request handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::RedbLinkRepository;

/// Application state shared across handlers.
///
/// Holds the link service (which owns the store handle) and the ambient
/// rendering context needed by link pages. Cloning is cheap: services are
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<RedbLinkRepository>>,
    /// Name of the share image asset embedded into link pages.
    pub image_name: String,
}

impl AppState {
    /// Creates application state from its components.
    pub fn new(link_service: Arc<LinkService<RedbLinkRepository>>, image_name: String) -> Self {
        Self {
            link_service,
            image_name,
        }
    }
}
