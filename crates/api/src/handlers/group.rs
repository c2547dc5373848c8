//! Handlers for the `/admins/groups` resource.

use attendance_core::error::CoreError;
use attendance_db::models::group::{CreateGroup, Group, GroupInfo, PatchGroup, PutGroup};
use attendance_db::repositories::GroupRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateGroup>,
) -> AppResult<(StatusCode, Json<Group>)> {
    state.rules.group_id(&input.group_id)?;
    let group = GroupRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutGroup>,
) -> AppResult<Json<Group>> {
    state.rules.group_id(&input.group_id)?;
    let group = GroupRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Group", &input.group_id))?;
    Ok(Json(group))
}

pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchGroup>,
) -> AppResult<StatusCode> {
    state.rules.group_id(&input.group_id)?;
    let group_id = input.group_id.clone();
    let affected = GroupRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Group", group_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/groups/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(group_id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = GroupRepo::delete(&state.pool, &group_id).await?;
    if !deleted {
        return Err(CoreError::not_found("Group", &group_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(group_id): Path<String>,
) -> AppResult<Json<GroupInfo>> {
    let group = GroupRepo::find_by_id(&state.pool, &group_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Group", &group_id))?;
    Ok(Json(group))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<GroupInfo>>> {
    let groups = GroupRepo::list(&state.pool).await?;
    Ok(Json(groups))
}

/// GET /api/admins/groups/profile/{id}
pub async fn list_by_profile(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(profile_id): Path<i64>,
) -> AppResult<Json<Vec<GroupInfo>>> {
    let groups = GroupRepo::list_by_profile(&state.pool, profile_id).await?;
    Ok(Json(groups))
}
