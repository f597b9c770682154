//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod room;
pub mod pan_card;
pub mod user;

// Re-export repositories
pub use room::RoomRepository;
pub use pan_card::PanCardRepository;
pub use user::UserRepository;
