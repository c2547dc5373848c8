//! Education level (bachelor, master...) model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EducationLevel {
    pub education_level_id: DbId,
    pub education_level_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducationLevel {
    pub education_level_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutEducationLevel {
    pub education_level_id: DbId,
    pub education_level_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchEducationLevel {
    pub education_level_id: DbId,
    pub education_level_name: Option<String>,
}
