//! HTTP handlers module
//!
//! This module contains the route handlers organized by resource:
//! - Health handlers for liveness and readiness
//! - Room handlers for hostel room assignments
//! - PAN card handlers for PAN card records

pub mod health;
pub mod rooms;
pub mod pan_cards;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::database::DatabaseService;
use crate::utils::errors::HostelError;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseService,
}

impl AppState {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }
}

/// `?email=` query used by the list endpoints
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

impl OwnerQuery {
    /// The owner email, or a `Validation` error when it is missing or empty
    pub fn require_email(self) -> Result<String, HostelError> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(email),
            _ => Err(HostelError::Validation("User email is required".to_string())),
        }
    }
}

/// Decode a JSON body whatever its `Content-Type`, reporting malformed input as a 400
pub(crate) fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, HostelError> {
    serde_json::from_slice(body).map_err(|e| HostelError::InvalidInput(e.to_string()))
}
