//! Faculty entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Faculty {
    pub faculty_id: DbId,
    pub university_id: DbId,
    pub faculty_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub faculty_email: String,
}

/// Read-side row enriched with the owning university's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyInfo {
    pub faculty_id: DbId,
    pub university_id: DbId,
    pub faculty_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub faculty_email: String,
    pub university_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaculty {
    pub university_id: DbId,
    pub faculty_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub faculty_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutFaculty {
    pub faculty_id: DbId,
    pub university_id: DbId,
    pub faculty_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub faculty_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchFaculty {
    pub faculty_id: DbId,
    pub university_id: Option<DbId>,
    pub faculty_name: Option<String>,
    pub head_last_name: Option<String>,
    pub head_first_name: Option<String>,
    pub head_middle_name: Option<String>,
    pub faculty_email: Option<String>,
}
