//! Handlers for the `/admins/universities` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_core::validation::ValidationRules;
use attendance_db::models::university::{
    CreateUniversity, PatchUniversity, PutUniversity, University,
};
use attendance_db::repositories::UniversityRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn validate_heads(
    rules: &ValidationRules,
    last: &str,
    first: &str,
    middle: &str,
) -> Result<(), CoreError> {
    rules.russian_text("head_last_name", last)?;
    rules.russian_text("head_first_name", first)?;
    rules.russian_text("head_middle_name", middle)
}

/// POST /api/admins/universities
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUniversity>,
) -> AppResult<(StatusCode, Json<University>)> {
    validate_heads(
        &state.rules,
        &input.head_last_name,
        &input.head_first_name,
        &input.head_middle_name,
    )?;
    let university = UniversityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(university)))
}

/// PUT /api/admins/universities
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutUniversity>,
) -> AppResult<Json<University>> {
    validate_heads(
        &state.rules,
        &input.head_last_name,
        &input.head_first_name,
        &input.head_middle_name,
    )?;
    let university = UniversityRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("University", input.university_id))?;
    Ok(Json(university))
}

/// PATCH /api/admins/universities
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchUniversity>,
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
    let id = input.university_id;
    let affected = UniversityRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("University", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/universities/id/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UniversityRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("University", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/universities/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<University>> {
    let university = UniversityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("University", id))?;
    Ok(Json(university))
}

/// GET /api/admins/universities/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<University>> {
    let university = UniversityRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("University", &name))?;
    Ok(Json(university))
}

/// GET /api/admins/universities
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<University>>> {
    let universities = UniversityRepo::list(&state.pool).await?;
    Ok(Json(universities))
}
