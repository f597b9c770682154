//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, RoomRepository, PanCardRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub rooms: RoomRepository,
    pub pan_cards: PanCardRepository,
    pub users: UserRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            rooms: RoomRepository::new(pool.clone()),
            pan_cards: PanCardRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}
