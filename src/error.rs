//! Application error type and HTTP response mapping.
//!
//! Every fallible operation in the service surfaces an [`AppError`]. Errors are
//! returned synchronously through `Result` channels and rendered as a JSON body
//! of the form `{"error": {"code", "message", "details"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Service-wide error taxonomy.
///
/// - [`Validation`](Self::Validation) - a required field was missing or empty;
///   caught at the validation gate, never reaches the store
/// - [`NotFound`](Self::NotFound) - lookup of an id with no stored value
/// - [`CorruptRecord`](Self::CorruptRecord) - stored bytes under a valid key
///   could not be deserialized; distinct from not-found so callers can tell
///   "never existed" from "exists but unreadable"
/// - [`Internal`](Self::Internal) - storage engine or other server-side failure;
///   never retried by the core
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    CorruptRecord { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn corrupt_record(message: impl Into<String>, details: Value) -> Self {
        Self::CorruptRecord {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::CorruptRecord { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        f.write_str(message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::CorruptRecord { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "corrupt_record",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}

/// Maps a storage engine failure to an internal error.
///
/// Engine details are logged but not exposed to the caller.
pub fn map_store_error(e: redb::Error) -> AppError {
    tracing::error!("Store error: {e}");

    AppError::internal("Store error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = AppError::bad_request("Field 'title' is required", json!({ "field": "title" }));
        assert_eq!(err.to_string(), "Field 'title' is required");
    }

    #[test]
    fn test_corrupt_record_is_distinct_from_not_found() {
        let corrupt = AppError::corrupt_record("Stored record could not be decoded", json!({}));
        let missing = AppError::not_found("Short link not found", json!({}));

        assert!(matches!(corrupt, AppError::CorruptRecord { .. }));
        assert!(matches!(missing, AppError::NotFound { .. }));
    }
}
