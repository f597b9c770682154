//! PAN card handlers

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use tracing::instrument;

use super::{json_body, AppState, OwnerQuery};
use crate::models::{ActionResponse, CreatePanCardRequest, PanCard, UpdatePanCardRequest};
use crate::utils::errors::{HostelError, Result};
use crate::utils::logging::log_record_action;

const PAN_CARD_NOT_FOUND: &str = "PAN Card not found";

fn not_found() -> HostelError {
    HostelError::NotFound(PAN_CARD_NOT_FOUND.to_string())
}

fn pan_card_id(id: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    id.map(|Path(id)| id).map_err(|_| not_found())
}

/// `GET /viewPanCards?email=`
#[instrument(skip_all)]
pub async fn list_pan_cards(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<PanCard>>> {
    let email = query.require_email()?;
    let pan_cards = state.db.pan_cards.list_by_owner(&email).await?;

    Ok(Json(pan_cards))
}

/// `POST /addPanCard`
#[instrument(skip_all)]
pub async fn create_pan_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ActionResponse>> {
    let request: CreatePanCardRequest = json_body(&body)?;
    let pan_card = state.db.pan_cards.create(request).await?;

    log_record_action("pan_card", "create", Some(pan_card.id), Some(&pan_card.created_by));
    Ok(Json(ActionResponse::ok("PAN Card added successfully")))
}

/// `GET /findPanCard/{id}`
#[instrument(skip_all)]
pub async fn get_pan_card(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<PanCard>> {
    let id = pan_card_id(id)?;
    let pan_card = state.db.pan_cards.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(pan_card))
}

/// `PUT /editPanCard/{id}`
#[instrument(skip_all)]
pub async fn update_pan_card(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<ActionResponse>> {
    let id = pan_card_id(id)?;
    let request: UpdatePanCardRequest = match json_body(&body) {
        Ok(request) => request,
        // A missing row is reported before a bad body
        Err(err) => {
            state.db.pan_cards.find_by_id(id).await?.ok_or_else(not_found)?;
            return Err(err);
        }
    };
    let pan_card = state.db.pan_cards.update(id, request).await?.ok_or_else(not_found)?;

    log_record_action("pan_card", "update", Some(pan_card.id), Some(&pan_card.created_by));
    Ok(Json(ActionResponse::ok("PAN Card updated successfully")))
}

/// `DELETE /deletePanCard/{id}`
#[instrument(skip_all)]
pub async fn delete_pan_card(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ActionResponse>> {
    let id = pan_card_id(id)?;
    if !state.db.pan_cards.delete(id).await? {
        return Err(not_found());
    }

    log_record_action("pan_card", "delete", Some(id), None);
    Ok(Json(ActionResponse::ok("PAN Card deleted successfully")))
}
