//! Room handlers

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use tracing::instrument;

use super::{json_body, AppState, OwnerQuery};
use crate::models::{ActionResponse, CreateRoomRequest, Room, UpdateRoomRequest};
use crate::utils::errors::{HostelError, Result};
use crate::utils::logging::log_record_action;

const ROOM_NOT_FOUND: &str = "Room not found";

fn not_found() -> HostelError {
    HostelError::NotFound(ROOM_NOT_FOUND.to_string())
}

/// Non-integer ids never match a room
fn room_id(id: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    id.map(|Path(id)| id).map_err(|_| not_found())
}

/// `GET /viewRooms?email=`
#[instrument(skip_all)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Room>>> {
    let email = query.require_email()?;
    let rooms = state.db.rooms.list_by_owner(&email).await?;

    Ok(Json(rooms))
}

/// `POST /addRoom`
#[instrument(skip_all)]
pub async fn create_room(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ActionResponse>> {
    let request: CreateRoomRequest = json_body(&body)?;
    let room = state.db.rooms.create(request).await?;

    log_record_action("room", "create", Some(room.id), Some(&room.created_by));
    Ok(Json(ActionResponse::ok("Room added successfully")))
}

/// `GET /findRoom/{id}`
#[instrument(skip_all)]
pub async fn get_room(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Room>> {
    let id = room_id(id)?;
    let room = state.db.rooms.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(room))
}

/// `PUT /editRoom/{id}`
#[instrument(skip_all)]
pub async fn update_room(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<ActionResponse>> {
    let id = room_id(id)?;
    let request: UpdateRoomRequest = match json_body(&body) {
        Ok(request) => request,
        // A missing row is reported before a bad body
        Err(err) => {
            state.db.rooms.find_by_id(id).await?.ok_or_else(not_found)?;
            return Err(err);
        }
    };
    let room = state.db.rooms.update(id, request).await?.ok_or_else(not_found)?;

    log_record_action("room", "update", Some(room.id), Some(&room.created_by));
    Ok(Json(ActionResponse::ok("Room updated successfully")))
}

/// `DELETE /deleteRoom/{id}`
#[instrument(skip_all)]
pub async fn delete_room(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ActionResponse>> {
    let id = room_id(id)?;
    if !state.db.rooms.delete(id).await? {
        return Err(not_found());
    }

    log_record_action("room", "delete", Some(id), None);
    Ok(Json(ActionResponse::ok("Room deleted successfully")))
}
