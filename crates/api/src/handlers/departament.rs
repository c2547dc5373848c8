//! Handlers for the `/admins/departaments` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::departament::{
    CreateDepartament, Departament, DepartamentInfo, PatchDepartament, PutDepartament,
};
use attendance_db::repositories::DepartamentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admins/departaments
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDepartament>,
) -> AppResult<(StatusCode, Json<Departament>)> {
    state.rules.russian_text("head_last_name", &input.head_last_name)?;
    state.rules.russian_text("head_first_name", &input.head_first_name)?;
    state.rules.russian_text("head_middle_name", &input.head_middle_name)?;
    let departament = DepartamentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(departament)))
}

/// PUT /api/admins/departaments
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutDepartament>,
) -> AppResult<Json<Departament>> {
    state.rules.russian_text("head_last_name", &input.head_last_name)?;
    state.rules.russian_text("head_first_name", &input.head_first_name)?;
    state.rules.russian_text("head_middle_name", &input.head_middle_name)?;
    let departament = DepartamentRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Departament", input.departament_id))?;
    Ok(Json(departament))
}

/// PATCH /api/admins/departaments
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchDepartament>,
) -> AppResult<StatusCode> {
    for (field, value) in [
        ("head_last_name", &input.head_last_name),
        ("head_first_name", &input.head_first_name),
        ("head_middle_name", &input.head_middle_name),
    ] {
        if let Some(value) = value {
            state.rules.russian_text(field, value)?;
        }
    }
    let id = input.departament_id;
    let affected = DepartamentRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Departament", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/departaments/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DepartamentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Departament", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/departaments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DepartamentInfo>> {
    let departament = DepartamentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Departament", id))?;
    Ok(Json(departament))
}

/// GET /api/admins/departaments/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<DepartamentInfo>> {
    let departament = DepartamentRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Departament", &name))?;
    Ok(Json(departament))
}

/// GET /api/admins/departaments
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<DepartamentInfo>>> {
    let departaments = DepartamentRepo::list(&state.pool).await?;
    Ok(Json(departaments))
}
