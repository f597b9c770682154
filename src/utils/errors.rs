//! Error handling for the hostel server
//!
//! This module defines the main error type used throughout the application
//! and how each kind of error is rendered as an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

/// Main error type for the hostel server
#[derive(Error, Debug)]
pub enum HostelError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Required request input was missing
    #[error("{0}")]
    Validation(String),

    /// A unique-together constraint rejected the write
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Malformed body or a field that may not be written
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for hostel server operations
pub type Result<T> = std::result::Result<T, HostelError>;

impl HostelError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HostelError::Database(_) => ErrorSeverity::Critical,
            HostelError::Migration(_) => ErrorSeverity::Critical,
            HostelError::Config(_) => ErrorSeverity::Critical,
            HostelError::Validation(_) => ErrorSeverity::Info,
            HostelError::Conflict(_) => ErrorSeverity::Info,
            HostelError::NotFound(_) => ErrorSeverity::Info,
            HostelError::InvalidInput(_) => ErrorSeverity::Info,
            HostelError::ServiceUnavailable(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            HostelError::Validation(_)
            | HostelError::Conflict(_)
            | HostelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HostelError::NotFound(_) => StatusCode::NOT_FOUND,
            HostelError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// True when a database error is a unique constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

impl IntoResponse for HostelError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self.severity() {
            ErrorSeverity::Info => info!(status = status.as_u16(), error = %self, "Request rejected"),
            ErrorSeverity::Warning => warn!(status = status.as_u16(), error = %self, "Request failed"),
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                error!(status = status.as_u16(), severity = %self.severity(), error = %self, "Request failed")
            }
        }

        let body = match &self {
            HostelError::NotFound(msg) => json!({ "message": msg }),
            HostelError::Validation(msg) | HostelError::Conflict(msg) => json!({ "error": msg }),
            HostelError::InvalidInput(_) | HostelError::ServiceUnavailable(_) => {
                json!({ "error": self.to_string() })
            }
            _ => json!({ "error": "Internal server error" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
