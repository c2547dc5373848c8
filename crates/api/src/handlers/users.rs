//! Handlers for the `/admins/users` resource.
//!
//! Uniqueness of username and of each role link is enforced by the
//! `uq_users_*` constraints; the error layer classifies violations into
//! field-specific conflicts, so no pre-check reads are made here.

use attendance_core::roles::Role;
use attendance_core::types::DbId;
use attendance_db::models::user::{
    CreateUser, PatchUserRequest, PutUser, User, UserInfo,
};
use attendance_db::repositories::UserRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admins/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    state.rules.username(&input.username)?;
    state.rules.password(&input.password)?;
    state
        .rules
        .role_links(input.role, input.headman_id, input.student_id, input.teacher_id)?;

    input.password = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/admins/users
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<PutUser>,
) -> AppResult<Json<User>> {
    state.rules.username(&input.username)?;
    state.rules.password(&input.password)?;
    state
        .rules
        .role_links(input.role, input.headman_id, input.student_id, input.teacher_id)?;

    input.password = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", input.user_id))?;
    Ok(Json(user))
}

/// PATCH /api/admins/users
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchUserRequest>,
) -> AppResult<StatusCode> {
    let PatchUserRequest { user_id, mut fields } = input;
    if let Some(username) = &fields.username {
        state.rules.username(username)?;
    }
    if let Some(password) = fields.password.take() {
        state.rules.password(&password)?;
        let hashed = hash_password(&password)
            .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;
        fields.password = Some(hashed);
    }

    let affected = UserRepo::patch(&state.pool, user_id, fields).await?;
    if affected == 0 {
        return Err(attendance_core::error::CoreError::not_found("User", user_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, user_id).await?;
    if !deleted {
        return Err(attendance_core::error::CoreError::not_found("User", user_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", user_id))?;
    Ok(Json(user))
}

/// GET /api/admins/users/name/{name}
pub async fn get_by_username(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_username(&state.pool, &name)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", &name))?;
    Ok(Json(user))
}

/// GET /api/admins/users/student/{id}
pub async fn get_by_student_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_student_id(&state.pool, student_id)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", student_id))?;
    Ok(Json(user))
}

/// GET /api/admins/users/headman/{id}
pub async fn get_by_headman_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(headman_id): Path<DbId>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_headman_id(&state.pool, headman_id)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", headman_id))?;
    Ok(Json(user))
}

/// GET /api/admins/users/teacher/{id}
pub async fn get_by_teacher_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(teacher_id): Path<DbId>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_teacher_id(&state.pool, teacher_id)
        .await?
        .ok_or_else(|| attendance_core::error::CoreError::not_found("User", teacher_id))?;
    Ok(Json(user))
}

/// GET /api/admins/users/role/{role}
pub async fn list_by_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(role): Path<Role>,
) -> AppResult<Json<Vec<UserInfo>>> {
    let users = UserRepo::list_by_role(&state.pool, role).await?;
    Ok(Json(users))
}

/// GET /api/admins/users
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserInfo>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}
