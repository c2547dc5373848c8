//! Handlers for the `/admins/profiles` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::profile::{
    CreateProfile, PatchProfile, Profile, ProfileInfo, PutProfile,
};
use attendance_db::repositories::ProfileRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    state.rules.specialty_code(&input.specialty_code)?;
    let profile = ProfileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutProfile>,
) -> AppResult<Json<Profile>> {
    state.rules.specialty_code(&input.specialty_code)?;
    let profile = ProfileRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", input.profile_id))?;
    Ok(Json(profile))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchProfile>,
) -> AppResult<StatusCode> {
    if let Some(code) = &input.specialty_code {
        state.rules.specialty_code(code)?;
    }
    let id = input.profile_id;
    let affected = ProfileRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Profile", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProfileRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Profile", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileInfo>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", id))?;
    Ok(Json(profile))
}

pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<ProfileInfo>> {
    let profile = ProfileRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", &name))?;
    Ok(Json(profile))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ProfileInfo>>> {
    let profiles = ProfileRepo::list(&state.pool).await?;
    Ok(Json(profiles))
}

/// GET /api/admins/profiles/specialty/{code}
pub async fn list_by_specialty(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(specialty_code): Path<String>,
) -> AppResult<Json<Vec<ProfileInfo>>> {
    let profiles = ProfileRepo::list_by_specialty(&state.pool, &specialty_code).await?;
    Ok(Json(profiles))
}
