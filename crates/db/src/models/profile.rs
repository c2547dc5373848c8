//! Profile entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Profile {
    pub profile_id: DbId,
    pub specialty_code: String,
    pub education_type_id: DbId,
    pub profile_name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileInfo {
    pub profile_id: DbId,
    pub specialty_code: String,
    pub education_type_id: DbId,
    pub profile_name: String,
    pub education_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub specialty_code: String,
    pub education_type_id: DbId,
    pub profile_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutProfile {
    pub profile_id: DbId,
    pub specialty_code: String,
    pub education_type_id: DbId,
    pub profile_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchProfile {
    pub profile_id: DbId,
    pub specialty_code: Option<String>,
    pub education_type_id: Option<DbId>,
    pub profile_name: Option<String>,
}
