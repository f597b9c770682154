//! PAN card model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A PAN card record owned by `created_by`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PanCard {
    pub id: i64,
    pub name: String,
    pub pan_number: String,
    pub dob: NaiveDate,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePanCardRequest {
    pub name: String,
    pub pan_number: String,
    pub dob: NaiveDate,
    pub created_by: String,
}

/// Editable PAN card fields. `id` and `created_by` are not part of the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePanCardRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "panNumber")]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
}
