//! Handlers for the `/admins/specialties` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::specialty::{
    CreateSpecialty, PatchSpecialty, PutSpecialty, Specialty, SpecialtyInfo,
};
use attendance_db::repositories::SpecialtyRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateSpecialty>,
) -> AppResult<(StatusCode, Json<Specialty>)> {
    state.rules.specialty_code(&input.specialty_code)?;
    let specialty = SpecialtyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(specialty)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutSpecialty>,
) -> AppResult<Json<Specialty>> {
    state.rules.specialty_code(&input.specialty_code)?;
    let specialty = SpecialtyRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Specialty", &input.specialty_code))?;
    Ok(Json(specialty))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchSpecialty>,
) -> AppResult<StatusCode> {
    state.rules.specialty_code(&input.specialty_code)?;
    let code = input.specialty_code.clone();
    let affected = SpecialtyRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Specialty", code).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/specialties/{code}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = SpecialtyRepo::delete(&state.pool, &code).await?;
    if !deleted {
        return Err(CoreError::not_found("Specialty", &code).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/specialties/code/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(code): Path<String>,
) -> AppResult<Json<SpecialtyInfo>> {
    let specialty = SpecialtyRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| CoreError::not_found("Specialty", &code))?;
    Ok(Json(specialty))
}

/// GET /api/admins/specialties/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<SpecialtyInfo>> {
    let specialty = SpecialtyRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Specialty", &name))?;
    Ok(Json(specialty))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<SpecialtyInfo>>> {
    let specialties = SpecialtyRepo::list(&state.pool).await?;
    Ok(Json(specialties))
}

/// GET /api/admins/specialties/departament/{id}
pub async fn list_by_departament(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(departament_id): Path<DbId>,
) -> AppResult<Json<Vec<SpecialtyInfo>>> {
    let specialties = SpecialtyRepo::list_by_departament(&state.pool, departament_id).await?;
    Ok(Json(specialties))
}
