//! Teacher entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Teacher {
    pub teacher_id: DbId,
    pub departament_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub teacher_email: String,
}

/// Read-side row enriched with the owning departament's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeacherInfo {
    pub teacher_id: DbId,
    pub departament_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub teacher_email: String,
    pub departament_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacher {
    pub departament_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub teacher_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutTeacher {
    pub teacher_id: DbId,
    pub departament_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub teacher_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchTeacher {
    pub teacher_id: DbId,
    pub departament_id: Option<DbId>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub teacher_email: Option<String>,
}
