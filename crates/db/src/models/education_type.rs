//! Education type (full-time, part-time...) model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EducationType {
    pub education_type_id: DbId,
    pub education_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducationType {
    pub education_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutEducationType {
    pub education_type_id: DbId,
    pub education_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchEducationType {
    pub education_type_id: DbId,
    pub education_type_name: Option<String>,
}
