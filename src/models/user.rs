//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored user. The password hash stays in the database row and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub location: String,
    /// Plain text; hashed before it reaches the database
    pub password: String,
}
