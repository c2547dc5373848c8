//! Departament entity model and DTOs.
//!
//! The `departament` spelling is part of the wire contract (table, columns,
//! JSON keys) and is used consistently.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Departament {
    pub departament_id: DbId,
    pub faculty_id: DbId,
    pub departament_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub departament_email: String,
}

/// Read-side row enriched with the owning faculty's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartamentInfo {
    pub departament_id: DbId,
    pub faculty_id: DbId,
    pub departament_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub departament_email: String,
    pub faculty_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartament {
    pub faculty_id: DbId,
    pub departament_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub departament_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutDepartament {
    pub departament_id: DbId,
    pub faculty_id: DbId,
    pub departament_name: String,
    pub head_last_name: String,
    pub head_first_name: String,
    pub head_middle_name: String,
    pub departament_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchDepartament {
    pub departament_id: DbId,
    pub faculty_id: Option<DbId>,
    pub departament_name: Option<String>,
    pub head_last_name: Option<String>,
    pub head_first_name: Option<String>,
    pub head_middle_name: Option<String>,
    pub departament_email: Option<String>,
}
