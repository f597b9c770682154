//! Liveness and readiness handlers

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::database::health_check;
use crate::models::MessageResponse;
use crate::utils::errors::{HostelError, Result};

pub const LIVENESS_MESSAGE: &str = "Hostel Management Server is running...";

/// Fixed liveness message; never touches the database
pub async fn default_route() -> Json<MessageResponse> {
    Json(MessageResponse::new(LIVENESS_MESSAGE))
}

/// Readiness probe that round-trips to the database
pub async fn readiness(State(state): State<AppState>) -> Result<Json<Value>> {
    health_check(state.db.pool()).await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        HostelError::ServiceUnavailable("database unreachable".to_string())
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
