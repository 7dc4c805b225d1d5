//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults suitable for local
//! development:
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"      # Bind address
//! export DB_PATH="./db"             # redb database file
//! export RUST_LOG="info"            # Log level
//! export LOG_FORMAT="text"          # Log format: text or json
//! export STATIC_DIR="public"        # Static asset directory
//! export IMAGE_NAME="demo-item.png" # Share image referenced by link pages
//! ```
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address in `host:port` form (`LISTEN`, default: `0.0.0.0:3000`).
    pub listen_addr: String,
    /// Filesystem path of the embedded key-value database (`DB_PATH`, default: `./db`).
    pub db_path: String,
    /// Log level when `RUST_LOG` is not set (default: `info`).
    pub log_level: String,
    /// Log format: `text` or `json` (`LOG_FORMAT`, default: `text`).
    pub log_format: String,
    /// Directory served under `/static` (`STATIC_DIR`, default: `public`).
    pub static_dir: String,
    /// Name of the share image asset embedded in link pages
    /// (`IMAGE_NAME`, default: `demo-item.png`).
    pub image_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let db_path = env::var("DB_PATH").unwrap_or_else(|_| "./db".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());
        let image_name = env::var("IMAGE_NAME").unwrap_or_else(|_| "demo-item.png".to_string());

        Self {
            listen_addr,
            db_path,
            log_level,
            log_format,
            static_dir,
            image_name,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `db_path`, `static_dir`, or `image_name` is empty
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_path.is_empty() {
            anyhow::bail!("DB_PATH must not be empty");
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        if self.image_name.is_empty() {
            anyhow::bail!("IMAGE_NAME must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database path: {}", self.db_path);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Share image: {}", self.image_name);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
