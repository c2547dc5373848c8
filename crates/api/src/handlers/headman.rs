//! Handlers for the `/admins/headmans` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::headman::{
    CreateHeadman, Headman, HeadmanInfo, PatchHeadman, PutHeadman,
};
use attendance_db::repositories::HeadmanRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateHeadman>,
) -> AppResult<(StatusCode, Json<Headman>)> {
    state.rules.group_id(&input.group_id)?;
    let headman = HeadmanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(headman)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutHeadman>,
) -> AppResult<Json<Headman>> {
    state.rules.group_id(&input.group_id)?;
    let headman = HeadmanRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Headman", input.headman_id))?;
    Ok(Json(headman))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchHeadman>,
) -> AppResult<StatusCode> {
    if let Some(group_id) = &input.group_id {
        state.rules.group_id(group_id)?;
    }
    let id = input.headman_id;
    let affected = HeadmanRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Headman", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeadmanRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Headman", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeadmanInfo>> {
    let headman = HeadmanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Headman", id))?;
    Ok(Json(headman))
}

/// GET /api/admins/headmans/student/{id}
pub async fn get_by_student_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<HeadmanInfo>> {
    let headman = HeadmanRepo::find_by_student_id(&state.pool, student_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Headman", student_id))?;
    Ok(Json(headman))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<HeadmanInfo>>> {
    let headmans = HeadmanRepo::list(&state.pool).await?;
    Ok(Json(headmans))
}
