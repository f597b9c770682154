//! Route table
//!
//! Maps every HTTP path onto its handler and attaches request tracing.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, pan_cards, rooms, AppState};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::default_route))
        .route("/health", get(health::readiness))
        // Rooms
        .route("/viewRooms", get(rooms::list_rooms))
        .route("/addRoom", post(rooms::create_room))
        .route("/findRoom/:id", get(rooms::get_room))
        .route("/editRoom/:id", put(rooms::update_room))
        .route("/deleteRoom/:id", delete(rooms::delete_room))
        // PAN cards
        .route("/viewPanCards", get(pan_cards::list_pan_cards))
        .route("/addPanCard", post(pan_cards::create_pan_card))
        .route("/findPanCard/:id", get(pan_cards::get_pan_card))
        .route("/editPanCard/:id", put(pan_cards::update_pan_card))
        .route("/deletePanCard/:id", delete(pan_cards::delete_pan_card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
