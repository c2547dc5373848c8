//! University entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `universities` table. The top of the organizational
/// hierarchy; carries the rector's name for report headers.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct University {
    pub university_id: DbId,
    pub university_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub university_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUniversity {
    pub university_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub university_email: String,
}

/// Full replace; the key travels in the body.
#[derive(Debug, Clone, Deserialize)]
pub struct PutUniversity {
    pub university_id: DbId,
    pub university_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub university_email: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchUniversity {
    pub university_id: DbId,
    pub university_name: Option<String>,
    pub head_last_name: Option<String>,
    pub head_first_name: Option<String>,
    pub head_middle_name: Option<String>,
    pub university_email: Option<String>,
}
