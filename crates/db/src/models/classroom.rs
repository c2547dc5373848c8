//! Classroom model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Classroom {
    pub classroom_id: DbId,
    pub classroom_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassroom {
    pub classroom_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutClassroom {
    pub classroom_id: DbId,
    pub classroom_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchClassroom {
    pub classroom_id: DbId,
    pub classroom_name: Option<String>,
}
