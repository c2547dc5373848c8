//! Discipline entity model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Discipline {
    pub discipline_id: DbId,
    pub departament_id: DbId,
    pub discipline_name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DisciplineInfo {
    pub discipline_id: DbId,
    pub departament_id: DbId,
    pub discipline_name: String,
    pub departament_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDiscipline {
    pub departament_id: DbId,
    pub discipline_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutDiscipline {
    pub discipline_id: DbId,
    pub departament_id: DbId,
    pub discipline_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchDiscipline {
    pub discipline_id: DbId,
    pub departament_id: Option<DbId>,
    pub discipline_name: Option<String>,
}
