//! Handlers for attendance records.
//!
//! Admin CRUD lives under `/admins/attendances`. Headmen and teachers use
//! the batch create/replace endpoints and the per-date roster views.
//!
//! Batch semantics: every item is validated up front, then applied one
//! independent statement at a time. The first storage error aborts the
//! remainder; earlier writes stay committed.

use attendance_core::error::CoreError;
use attendance_core::types::{Date, DbId};
use attendance_db::models::attendance::{
    Attendance, AttendanceInfo, CreateAttendance, GroupAttendanceRow, PatchAttendanceRequest,
    PutAttendance,
};
use attendance_db::repositories::AttendanceRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireHeadman, RequireTeacher};
use crate::state::AppState;

/// Request body for the batch create endpoints.
#[derive(Debug, Deserialize)]
pub struct CreateAttendanceBatch {
    pub attendances: Vec<CreateAttendance>,
}

/// Request body for the batch replace endpoints.
#[derive(Debug, Deserialize)]
pub struct PutAttendanceBatch {
    pub attendances: Vec<PutAttendance>,
}

fn validate_reasons<'a, I>(state: &AppState, reasons: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    for reason in reasons.into_iter().flatten() {
        state.rules.russian_text("reason", reason)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// POST /api/admins/attendances
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAttendance>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    validate_reasons(&state, [input.reason.as_deref()])?;
    let attendance = AttendanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// PUT /api/admins/attendances
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutAttendance>,
) -> AppResult<StatusCode> {
    validate_reasons(&state, [input.reason.as_deref()])?;
    let updated = AttendanceRepo::put(&state.pool, &input).await?;
    if !updated {
        return Err(CoreError::not_found("Attendance", input.attendance_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/admins/attendances
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchAttendanceRequest>,
) -> AppResult<StatusCode> {
    if let Some(Some(reason)) = &input.fields.reason {
        state.rules.russian_text("reason", reason)?;
    }
    let PatchAttendanceRequest {
        attendance_id,
        fields,
    } = input;
    let affected = AttendanceRepo::patch(&state.pool, attendance_id, fields).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Attendance", attendance_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/attendances/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AttendanceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Attendance", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/attendances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AttendanceInfo>> {
    let attendance = AttendanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Attendance", id))?;
    Ok(Json(attendance))
}

/// GET /api/admins/attendances
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AttendanceInfo>>> {
    let attendances = AttendanceRepo::list(&state.pool).await?;
    Ok(Json(attendances))
}

/// GET /api/admins/attendances/student/{id}
pub async fn list_by_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<AttendanceInfo>>> {
    let attendances = AttendanceRepo::list_by_student(&state.pool, student_id).await?;
    Ok(Json(attendances))
}

// ---------------------------------------------------------------------------
// Batch endpoints (headman and teacher)
// ---------------------------------------------------------------------------

async fn create_batch_inner(
    state: &AppState,
    input: CreateAttendanceBatch,
) -> AppResult<(StatusCode, Json<Vec<Attendance>>)> {
    validate_reasons(
        state,
        input.attendances.iter().map(|a| a.reason.as_deref()),
    )?;

    let mut created = Vec::with_capacity(input.attendances.len());
    for item in &input.attendances {
        created.push(AttendanceRepo::create(&state.pool, item).await?);
    }
    Ok((StatusCode::CREATED, Json(created)))
}

async fn put_batch_inner(state: &AppState, input: PutAttendanceBatch) -> AppResult<StatusCode> {
    validate_reasons(
        state,
        input.attendances.iter().map(|a| a.reason.as_deref()),
    )?;

    for item in &input.attendances {
        let updated = AttendanceRepo::put(&state.pool, item).await?;
        if !updated {
            return Err(CoreError::not_found("Attendance", item.attendance_id).into());
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/headmans/attendances
pub async fn headman_create_batch(
    State(state): State<AppState>,
    RequireHeadman(_user): RequireHeadman,
    Json(input): Json<CreateAttendanceBatch>,
) -> AppResult<(StatusCode, Json<Vec<Attendance>>)> {
    create_batch_inner(&state, input).await
}

/// PUT /api/headmans/attendances
pub async fn headman_put_batch(
    State(state): State<AppState>,
    RequireHeadman(_user): RequireHeadman,
    Json(input): Json<PutAttendanceBatch>,
) -> AppResult<StatusCode> {
    put_batch_inner(&state, input).await
}

/// POST /api/teachers/attendances
pub async fn teacher_create_batch(
    State(state): State<AppState>,
    RequireTeacher(_user): RequireTeacher,
    Json(input): Json<CreateAttendanceBatch>,
) -> AppResult<(StatusCode, Json<Vec<Attendance>>)> {
    create_batch_inner(&state, input).await
}

/// PUT /api/teachers/attendances
pub async fn teacher_put_batch(
    State(state): State<AppState>,
    RequireTeacher(_user): RequireTeacher,
    Json(input): Json<PutAttendanceBatch>,
) -> AppResult<StatusCode> {
    put_batch_inner(&state, input).await
}

// ---------------------------------------------------------------------------
// Roster views
// ---------------------------------------------------------------------------

async fn roster_inner(
    state: &AppState,
    group_id: &str,
    schedule_id: DbId,
    date: Date,
) -> AppResult<Json<Vec<GroupAttendanceRow>>> {
    state.rules.group_id(group_id)?;
    let roster =
        AttendanceRepo::list_group_by_schedule_and_date(&state.pool, group_id, schedule_id, date)
            .await?;
    Ok(Json(roster))
}

/// GET /api/headmans/attendances/schedule/{id}/date/{date}
///
/// The group is the headman's own; it never comes from the request.
pub async fn headman_roster(
    State(state): State<AppState>,
    RequireHeadman(user): RequireHeadman,
    Path((schedule_id, date)): Path<(DbId, Date)>,
) -> AppResult<Json<Vec<GroupAttendanceRow>>> {
    let group_id = user.require_group()?.to_string();
    roster_inner(&state, &group_id, schedule_id, date).await
}

/// GET /api/teachers/attendances/group/{group_id}/schedule/{id}/date/{date}
pub async fn teacher_roster(
    State(state): State<AppState>,
    RequireTeacher(_user): RequireTeacher,
    Path((group_id, schedule_id, date)): Path<(String, DbId, Date)>,
) -> AppResult<Json<Vec<GroupAttendanceRow>>> {
    roster_inner(&state, &group_id, schedule_id, date).await
}
