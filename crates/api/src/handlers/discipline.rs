//! Handlers for the `/admins/disciplines` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::discipline::{
    CreateDiscipline, Discipline, DisciplineInfo, PatchDiscipline, PutDiscipline,
};
use attendance_db::repositories::DisciplineRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admins/disciplines
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDiscipline>,
) -> AppResult<(StatusCode, Json<Discipline>)> {
    let discipline = DisciplineRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(discipline)))
}

/// PUT /api/admins/disciplines
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutDiscipline>,
) -> AppResult<Json<Discipline>> {
    let discipline = DisciplineRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Discipline", input.discipline_id))?;
    Ok(Json(discipline))
}

/// PATCH /api/admins/disciplines
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchDiscipline>,
) -> AppResult<StatusCode> {
    let id = input.discipline_id;
    let affected = DisciplineRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Discipline", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/disciplines/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DisciplineRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Discipline", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/disciplines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DisciplineInfo>> {
    let discipline = DisciplineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Discipline", id))?;
    Ok(Json(discipline))
}

/// GET /api/admins/disciplines/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<DisciplineInfo>> {
    let discipline = DisciplineRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Discipline", &name))?;
    Ok(Json(discipline))
}

/// GET /api/admins/disciplines
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<DisciplineInfo>>> {
    let disciplines = DisciplineRepo::list(&state.pool).await?;
    Ok(Json(disciplines))
}
