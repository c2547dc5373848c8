//! Handlers for the `/admins/teachers` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::teacher::{
    CreateTeacher, PatchTeacher, PutTeacher, Teacher, TeacherInfo,
};
use attendance_db::repositories::TeacherRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admins/teachers
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateTeacher>,
) -> AppResult<(StatusCode, Json<Teacher>)> {
    state.rules.russian_text("last_name", &input.last_name)?;
    state.rules.russian_text("first_name", &input.first_name)?;
    state.rules.russian_text("middle_name", &input.middle_name)?;
    let teacher = TeacherRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// PUT /api/admins/teachers
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutTeacher>,
) -> AppResult<Json<Teacher>> {
    state.rules.russian_text("last_name", &input.last_name)?;
    state.rules.russian_text("first_name", &input.first_name)?;
    state.rules.russian_text("middle_name", &input.middle_name)?;
    let teacher = TeacherRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Teacher", input.teacher_id))?;
    Ok(Json(teacher))
}

/// PATCH /api/admins/teachers
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchTeacher>,
) -> AppResult<StatusCode> {
    for (field, value) in [
        ("last_name", &input.last_name),
        ("first_name", &input.first_name),
        ("middle_name", &input.middle_name),
    ] {
        if let Some(value) = value {
            state.rules.russian_text(field, value)?;
        }
    }
    let id = input.teacher_id;
    let affected = TeacherRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Teacher", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/teachers/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeacherRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Teacher", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/teachers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeacherInfo>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Teacher", id))?;
    Ok(Json(teacher))
}

/// GET /api/admins/teachers/email/{email}
pub async fn get_by_email(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(email): Path<String>,
) -> AppResult<Json<TeacherInfo>> {
    let teacher = TeacherRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| CoreError::not_found("Teacher", &email))?;
    Ok(Json(teacher))
}

/// GET /api/admins/teachers
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<TeacherInfo>>> {
    let teachers = TeacherRepo::list(&state.pool).await?;
    Ok(Json(teachers))
}

/// GET /api/admins/teachers/departament/{id}
pub async fn list_by_departament(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(departament_id): Path<DbId>,
) -> AppResult<Json<Vec<TeacherInfo>>> {
    let teachers = TeacherRepo::list_by_departament(&state.pool, departament_id).await?;
    Ok(Json(teachers))
}
