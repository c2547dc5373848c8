//! Headman (group monitor) entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Headman {
    pub headman_id: DbId,
    pub student_id: DbId,
    pub group_id: String,
}

/// Read-side row enriched with the underlying student's full name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeadmanInfo {
    pub headman_id: DbId,
    pub student_id: DbId,
    pub group_id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeadman {
    pub student_id: DbId,
    pub group_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutHeadman {
    pub headman_id: DbId,
    pub student_id: DbId,
    pub group_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchHeadman {
    pub headman_id: DbId,
    pub student_id: Option<DbId>,
    pub group_id: Option<String>,
}
