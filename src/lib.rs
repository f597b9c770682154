//! Hostel Server
//!
//! A JSON-over-HTTP CRUD backend for hostel room assignments and PAN card
//! records. Every record is owned by the email in its `created_by` column and
//! listed per owner; uniqueness of (number, owner) pairs is enforced by PostgreSQL.

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HostelError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::AppState;
pub use routes::create_router;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
