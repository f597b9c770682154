//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod room;
pub mod pan_card;
pub mod user;
pub mod response;

// Re-export commonly used models
pub use room::{Room, CreateRoomRequest, UpdateRoomRequest};
pub use pan_card::{PanCard, CreatePanCardRequest, UpdatePanCardRequest};
pub use user::{User, NewUser};
pub use response::{MessageResponse, ActionResponse};
