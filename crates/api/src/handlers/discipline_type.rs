//! Handlers for the `/admins/discipline_types` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::discipline_type::{
    CreateDisciplineType, DisciplineType, PatchDisciplineType, PutDisciplineType,
};
use attendance_db::repositories::DisciplineTypeRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDisciplineType>,
) -> AppResult<(StatusCode, Json<DisciplineType>)> {
    let discipline_type = DisciplineTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(discipline_type)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutDisciplineType>,
) -> AppResult<Json<DisciplineType>> {
    let discipline_type = DisciplineTypeRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("DisciplineType", input.discipline_type_id))?;
    Ok(Json(discipline_type))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchDisciplineType>,
) -> AppResult<StatusCode> {
    let id = input.discipline_type_id;
    let affected = DisciplineTypeRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("DisciplineType", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DisciplineTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("DisciplineType", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DisciplineType>> {
    let discipline_type = DisciplineTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("DisciplineType", id))?;
    Ok(Json(discipline_type))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<DisciplineType>>> {
    let discipline_types = DisciplineTypeRepo::list(&state.pool).await?;
    Ok(Json(discipline_types))
}
