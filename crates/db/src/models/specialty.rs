//! Specialty entity model and DTOs. Keyed by the natural NN.NN.NN code.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Specialty {
    pub specialty_code: String,
    pub specialty_name: String,
    pub departament_id: DbId,
    pub education_level_id: DbId,
}

/// Read-side row enriched with departament and education-level names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpecialtyInfo {
    pub specialty_code: String,
    pub specialty_name: String,
    pub departament_id: DbId,
    pub education_level_id: DbId,
    pub departament_name: String,
    pub education_level_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecialty {
    pub specialty_code: String,
    pub specialty_name: String,
    pub departament_id: DbId,
    pub education_level_id: DbId,
}

/// Full replace keyed by the code (the code itself is immutable).
#[derive(Debug, Clone, Deserialize)]
pub struct PutSpecialty {
    pub specialty_code: String,
    pub specialty_name: String,
    pub departament_id: DbId,
    pub education_level_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchSpecialty {
    pub specialty_code: String,
    pub specialty_name: Option<String>,
    pub departament_id: Option<DbId>,
    pub education_level_id: Option<DbId>,
}
