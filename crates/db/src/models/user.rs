//! User account model and DTOs.

use attendance_core::roles::Role;
use attendance_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::double_option;

/// Full user row. The password hash is never serialized to API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[sqlx(rename = "user_role")]
    #[serde(rename = "user_role")]
    pub role: Role,
    pub headman_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
}

/// User row enriched with the linked person's identity: the student's name
/// and group (directly for students, through the student row for headmen),
/// or the teacher's name. Admins carry no enrichment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserInfo {
    pub user_id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[sqlx(rename = "user_role")]
    #[serde(rename = "user_role")]
    pub role: Role,
    pub headman_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
    pub student_last_name: Option<String>,
    pub student_first_name: Option<String>,
    pub student_middle_name: Option<String>,
    pub group_id: Option<String>,
    pub teacher_last_name: Option<String>,
    pub teacher_first_name: Option<String>,
    pub teacher_middle_name: Option<String>,
}

/// Insert DTO; `password` is already hashed by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    #[serde(rename = "user_role")]
    pub role: Role,
    pub headman_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutUser {
    pub user_id: Uuid,
    pub username: String,
    pub password: String,
    #[serde(rename = "user_role")]
    pub role: Role,
    pub headman_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
}

/// Partial update. The link columns are nullable so a role change can clear
/// them with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, rename = "user_role")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "double_option")]
    pub headman_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub student_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub teacher_id: Option<Option<DbId>>,
}

/// Patch request body: the key plus the fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchUserRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub fields: PatchUser,
}
