//! Room model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hostel room assignment owned by `created_by`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub student_name: String,
    pub hostel: String,
    pub room_number: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub student_name: String,
    pub hostel: String,
    pub room_number: String,
    pub created_by: String,
}

/// Editable room fields. `id` and `created_by` are not part of the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRoomRequest {
    #[serde(default, alias = "studentName")]
    pub student_name: Option<String>,
    #[serde(default)]
    pub hostel: Option<String>,
    #[serde(default, alias = "roomNumber")]
    pub room_number: Option<String>,
}
