//! Handlers for the `/admins/faculties` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::faculty::{
    CreateFaculty, Faculty, FacultyInfo, PatchFaculty, PutFaculty,
};
use attendance_db::repositories::FacultyRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admins/faculties
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFaculty>,
) -> AppResult<(StatusCode, Json<Faculty>)> {
    state.rules.russian_text("head_last_name", &input.head_last_name)?;
    state.rules.russian_text("head_first_name", &input.head_first_name)?;
    state.rules.russian_text("head_middle_name", &input.head_middle_name)?;
    let faculty = FacultyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

/// PUT /api/admins/faculties
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutFaculty>,
) -> AppResult<Json<Faculty>> {
    state.rules.russian_text("head_last_name", &input.head_last_name)?;
    state.rules.russian_text("head_first_name", &input.head_first_name)?;
    state.rules.russian_text("head_middle_name", &input.head_middle_name)?;
    let faculty = FacultyRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Faculty", input.faculty_id))?;
    Ok(Json(faculty))
}

/// PATCH /api/admins/faculties
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchFaculty>,
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
    let id = input.faculty_id;
    let affected = FacultyRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Faculty", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/faculties/id/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FacultyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Faculty", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/faculties/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<FacultyInfo>> {
    let faculty = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Faculty", id))?;
    Ok(Json(faculty))
}

/// GET /api/admins/faculties/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<FacultyInfo>> {
    let faculty = FacultyRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Faculty", &name))?;
    Ok(Json(faculty))
}

/// GET /api/admins/faculties
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<FacultyInfo>>> {
    let faculties = FacultyRepo::list(&state.pool).await?;
    Ok(Json(faculties))
}

/// GET /api/admins/faculties/university/id/{id}
pub async fn list_by_university(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(university_id): Path<DbId>,
) -> AppResult<Json<Vec<FacultyInfo>>> {
    let faculties = FacultyRepo::list_by_university(&state.pool, university_id).await?;
    Ok(Json(faculties))
}
