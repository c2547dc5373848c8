//! Handlers for the `/admins/classrooms` resource.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_db::models::classroom::{Classroom, CreateClassroom, PatchClassroom, PutClassroom};
use attendance_db::repositories::ClassroomRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateClassroom>,
) -> AppResult<(StatusCode, Json<Classroom>)> {
    let classroom = ClassroomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(classroom)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutClassroom>,
) -> AppResult<Json<Classroom>> {
    let classroom = ClassroomRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Classroom", input.classroom_id))?;
    Ok(Json(classroom))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchClassroom>,
) -> AppResult<StatusCode> {
    let id = input.classroom_id;
    let affected = ClassroomRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Classroom", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClassroomRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Classroom", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Classroom>> {
    let classroom = ClassroomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Classroom", id))?;
    Ok(Json(classroom))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Classroom>>> {
    let classrooms = ClassroomRepo::list(&state.pool).await?;
    Ok(Json(classrooms))
}
