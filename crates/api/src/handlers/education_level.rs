//! Handlers for the `/admins/education_levels` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::education_level::{
    CreateEducationLevel, EducationLevel, PatchEducationLevel, PutEducationLevel,
};
use attendance_db::repositories::EducationLevelRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateEducationLevel>,
) -> AppResult<(StatusCode, Json<EducationLevel>)> {
    let education_level = EducationLevelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(education_level)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutEducationLevel>,
) -> AppResult<Json<EducationLevel>> {
    let education_level = EducationLevelRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("EducationLevel", input.education_level_id))?;
    Ok(Json(education_level))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchEducationLevel>,
) -> AppResult<StatusCode> {
    let id = input.education_level_id;
    let affected = EducationLevelRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("EducationLevel", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EducationLevelRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("EducationLevel", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<EducationLevel>> {
    let education_level = EducationLevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("EducationLevel", id))?;
    Ok(Json(education_level))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<EducationLevel>>> {
    let education_levels = EducationLevelRepo::list(&state.pool).await?;
    Ok(Json(education_levels))
}
