//! Room repository implementation

use sqlx::PgPool;
use crate::models::room::{Room, CreateRoomRequest, UpdateRoomRequest};
use crate::utils::errors::{is_unique_violation, HostelError};

pub const ROOM_CONFLICT_MESSAGE: &str = "Room number already exists for this user";

#[derive(Clone)]
#[derive(Debug)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every room owned by `created_by`, oldest first
    pub async fn list_by_owner(&self, created_by: &str) -> Result<Vec<Room>, HostelError> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, student_name, hostel, room_number, created_by FROM rooms WHERE created_by = $1 ORDER BY id"
        )
        .bind(created_by)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    /// Create a new room. A duplicate (room_number, created_by) pair is a `Conflict`.
    pub async fn create(&self, request: CreateRoomRequest) -> Result<Room, HostelError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (student_name, hostel, room_number, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_name, hostel, room_number, created_by
            "#
        )
        .bind(request.student_name)
        .bind(request.hostel)
        .bind(request.room_number)
        .bind(request.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(room)
    }

    /// Find room by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Room>, HostelError> {
        let room = sqlx::query_as::<_, Room>(
            "SELECT id, student_name, hostel, room_number, created_by FROM rooms WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    /// Update the supplied fields in one statement. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, request: UpdateRoomRequest) -> Result<Option<Room>, HostelError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET student_name = COALESCE($2, student_name),
                hostel = COALESCE($3, hostel),
                room_number = COALESCE($4, room_number)
            WHERE id = $1
            RETURNING id, student_name, hostel, room_number, created_by
            "#
        )
        .bind(id)
        .bind(request.student_name)
        .bind(request.hostel)
        .bind(request.room_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(room)
    }

    /// Delete room. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, HostelError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(err: sqlx::Error) -> HostelError {
    if is_unique_violation(&err) {
        HostelError::Conflict(ROOM_CONFLICT_MESSAGE.to_string())
    } else {
        HostelError::Database(err)
    }
}
