//! Student entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Student {
    pub student_id: DbId,
    pub group_id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub group_id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutStudent {
    pub student_id: DbId,
    pub group_id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchStudent {
    pub student_id: DbId,
    pub group_id: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
}
