//! Discipline type (lecture, seminar, lab...) model and DTOs.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DisciplineType {
    pub discipline_type_id: DbId,
    pub discipline_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisciplineType {
    pub discipline_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutDisciplineType {
    pub discipline_type_id: DbId,
    pub discipline_type_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchDisciplineType {
    pub discipline_type_id: DbId,
    pub discipline_type_name: Option<String>,
}
