//! PAN card repository implementation

use sqlx::PgPool;
use crate::models::pan_card::{PanCard, CreatePanCardRequest, UpdatePanCardRequest};
use crate::utils::errors::{is_unique_violation, HostelError};

pub const PAN_CARD_CONFLICT_MESSAGE: &str = "PAN number already exists for this user";

#[derive(Clone)]
#[derive(Debug)]
pub struct PanCardRepository {
    pool: PgPool,
}

impl PanCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every PAN card owned by `created_by`, oldest first
    pub async fn list_by_owner(&self, created_by: &str) -> Result<Vec<PanCard>, HostelError> {
        let pan_cards = sqlx::query_as::<_, PanCard>(
            "SELECT id, name, pan_number, dob, created_by FROM pan_cards WHERE created_by = $1 ORDER BY id"
        )
        .bind(created_by)
        .fetch_all(&self.pool)
        .await?;

        Ok(pan_cards)
    }

    /// Create a new PAN card. A duplicate (pan_number, created_by) pair is a `Conflict`.
    pub async fn create(&self, request: CreatePanCardRequest) -> Result<PanCard, HostelError> {
        let pan_card = sqlx::query_as::<_, PanCard>(
            r#"
            INSERT INTO pan_cards (name, pan_number, dob, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, pan_number, dob, created_by
            "#
        )
        .bind(request.name)
        .bind(request.pan_number)
        .bind(request.dob)
        .bind(request.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(pan_card)
    }

    /// Find PAN card by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<PanCard>, HostelError> {
        let pan_card = sqlx::query_as::<_, PanCard>(
            "SELECT id, name, pan_number, dob, created_by FROM pan_cards WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pan_card)
    }

    /// Update the supplied fields in one statement. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, request: UpdatePanCardRequest) -> Result<Option<PanCard>, HostelError> {
        let pan_card = sqlx::query_as::<_, PanCard>(
            r#"
            UPDATE pan_cards
            SET name = COALESCE($2, name),
                pan_number = COALESCE($3, pan_number),
                dob = COALESCE($4, dob)
            WHERE id = $1
            RETURNING id, name, pan_number, dob, created_by
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.pan_number)
        .bind(request.dob)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(pan_card)
    }

    /// Delete PAN card. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, HostelError> {
        let result = sqlx::query("DELETE FROM pan_cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(err: sqlx::Error) -> HostelError {
    if is_unique_violation(&err) {
        HostelError::Conflict(PAN_CARD_CONFLICT_MESSAGE.to_string())
    } else {
        HostelError::Database(err)
    }
}
