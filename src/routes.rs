//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Service banner (public)
//! - `POST /`         - Create a short link (public)
//! - `GET  /{id}`     - Social-share HTML page with redirect (public)
//! - `GET  /health`   - Health check: store (public)
//! - `/static/*`      - Static assets (share images)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_link_handler, health_handler, index_handler, link_page_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler).post(create_link_handler))
        .route("/health", get(health_handler))
        .route("/{id}", get(link_page_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
