//! # Shortlink
//!
//! A social-media short link generator and redirect service built with Axum and redb.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Embedded key-value persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## How it works
//!
//! A `POST /` with `{title, description, redirectUrl}` derives a deterministic
//! 20-character id from the canonical serialization of those three fields and
//! persists the record under that id. A `GET /{id}` serves an HTML page carrying
//! social meta tags which immediately redirects the visitor to the original URL.
//!
//! Identical payloads always derive the identical id, so re-creating a link is
//! an idempotent overwrite rather than an error.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides (defaults shown)
//! export LISTEN="0.0.0.0:3000"
//! export DB_PATH="./db"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::LinkRecord;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
