//! Group entity model and DTOs. Keyed by the natural NNNN-NN.NN.NN-N id
//! encoding cohort year, specialty code, and sequence number.

use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Group {
    pub group_id: String,
    pub profile_id: DbId,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupInfo {
    pub group_id: String,
    pub profile_id: DbId,
    pub profile_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroup {
    pub group_id: String,
    pub profile_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutGroup {
    pub group_id: String,
    pub profile_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchGroup {
    pub group_id: String,
    pub profile_id: Option<DbId>,
}
