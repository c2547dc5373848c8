//! Handlers for the `/admins/education_types` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::education_type::{
    CreateEducationType, EducationType, PatchEducationType, PutEducationType,
};
use attendance_db::repositories::EducationTypeRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateEducationType>,
) -> AppResult<(StatusCode, Json<EducationType>)> {
    let education_type = EducationTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(education_type)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutEducationType>,
) -> AppResult<Json<EducationType>> {
    let education_type = EducationTypeRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("EducationType", input.education_type_id))?;
    Ok(Json(education_type))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchEducationType>,
) -> AppResult<StatusCode> {
    let id = input.education_type_id;
    let affected = EducationTypeRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("EducationType", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EducationTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("EducationType", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<EducationType>> {
    let education_type = EducationTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("EducationType", id))?;
    Ok(Json(education_type))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<EducationType>>> {
    let education_types = EducationTypeRepo::list(&state.pool).await?;
    Ok(Json(education_types))
}
