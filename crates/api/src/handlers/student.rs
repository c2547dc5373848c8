//! Handlers for the `/admins/students` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::student::{CreateStudent, PatchStudent, PutStudent, Student};
use attendance_db::repositories::StudentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    state.rules.group_id(&input.group_id)?;
    state.rules.russian_text("last_name", &input.last_name)?;
    state.rules.russian_text("first_name", &input.first_name)?;
    state.rules.russian_text("middle_name", &input.middle_name)?;
    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutStudent>,
) -> AppResult<Json<Student>> {
    state.rules.group_id(&input.group_id)?;
    state.rules.russian_text("last_name", &input.last_name)?;
    state.rules.russian_text("first_name", &input.first_name)?;
    state.rules.russian_text("middle_name", &input.middle_name)?;
    let student = StudentRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", input.student_id))?;
    Ok(Json(student))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchStudent>,
) -> AppResult<StatusCode> {
    if let Some(group_id) = &input.group_id {
        state.rules.group_id(group_id)?;
    }
    for (field, value) in [
        ("last_name", &input.last_name),
        ("first_name", &input.first_name),
        ("middle_name", &input.middle_name),
    ] {
        if let Some(value) = value {
            state.rules.russian_text(field, value)?;
        }
    }
    let id = input.student_id;
    let affected = StudentRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Student", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Student", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", id))?;
    Ok(Json(student))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/admins/students/group/{group_id}
pub async fn list_by_group(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(group_id): Path<String>,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list_by_group(&state.pool, &group_id).await?;
    Ok(Json(students))
}
