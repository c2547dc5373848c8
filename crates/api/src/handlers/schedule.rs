//! Handlers for schedules.
//!
//! Admin CRUD lives under `/admins/schedules`. The role-scoped timetable
//! views (`/headmans/schedules/...`, `/students/schedules/...`,
//! `/teachers/schedules/...`) resolve the group or teacher from the
//! authenticated account and share the inner query helpers.

use attendance_core::error::CoreError;
use attendance_core::types::DbId;
use attendance_core::week::{DayOfWeek, WeekType};
use attendance_db::models::schedule::{
    CreateSchedule, GroupedSchedules, PatchSchedule, PutSchedule, Schedule, ScheduleInfo,
};
use attendance_db::repositories::ScheduleRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireHeadman, RequireStudent, RequireTeacher};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// POST /api/admins/schedules
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateSchedule>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    state.rules.group_id(&input.group_id)?;
    let schedule = ScheduleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/admins/schedules
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PutSchedule>,
) -> AppResult<Json<Schedule>> {
    state.rules.group_id(&input.group_id)?;
    let schedule = ScheduleRepo::put(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Schedule", input.schedule_id))?;
    Ok(Json(schedule))
}

/// PATCH /api/admins/schedules
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PatchSchedule>,
) -> AppResult<StatusCode> {
    if let Some(group_id) = &input.group_id {
        state.rules.group_id(group_id)?;
    }
    let id = input.schedule_id;
    let affected = ScheduleRepo::patch(&state.pool, input).await?;
    if affected == 0 {
        return Err(CoreError::not_found("Schedule", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admins/schedules/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ScheduleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Schedule", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admins/schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ScheduleInfo>> {
    let schedule = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Schedule", id))?;
    Ok(Json(schedule))
}

/// GET /api/admins/schedules
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules = ScheduleRepo::list(&state.pool).await?;
    Ok(Json(schedules))
}

/// GET /api/admins/schedules/group/{group_id}
pub async fn list_by_group(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(group_id): Path<String>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules = ScheduleRepo::list_by_group(&state.pool, &group_id).await?;
    Ok(Json(schedules))
}

/// GET /api/admins/schedules/teacher/{id}
pub async fn list_by_teacher(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(teacher_id): Path<DbId>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules = ScheduleRepo::list_by_teacher(&state.pool, teacher_id).await?;
    Ok(Json(schedules))
}

// ---------------------------------------------------------------------------
// Group-scoped views (headman and student resolve their own group)
// ---------------------------------------------------------------------------

async fn group_week_inner(
    state: &AppState,
    group_id: &str,
    week: WeekType,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules = ScheduleRepo::actual_by_group_and_week(&state.pool, group_id, week).await?;
    Ok(Json(schedules))
}

async fn group_week_day_inner(
    state: &AppState,
    group_id: &str,
    week: WeekType,
    day: DayOfWeek,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules =
        ScheduleRepo::actual_by_group_week_and_day(&state.pool, group_id, week, day).await?;
    Ok(Json(schedules))
}

/// GET /api/headmans/schedules
pub async fn headman_grouped(
    State(state): State<AppState>,
    RequireHeadman(user): RequireHeadman,
) -> AppResult<Json<GroupedSchedules>> {
    let group_id = user.require_group()?;
    let grouped = ScheduleRepo::grouped_by_group(&state.pool, group_id).await?;
    Ok(Json(grouped))
}

/// GET /api/headmans/schedules/week/{week}
pub async fn headman_by_week(
    State(state): State<AppState>,
    RequireHeadman(user): RequireHeadman,
    Path(week): Path<WeekType>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    group_week_inner(&state, user.require_group()?, week).await
}

/// GET /api/headmans/schedules/week/{week}/day/{day}
pub async fn headman_by_week_and_day(
    State(state): State<AppState>,
    RequireHeadman(user): RequireHeadman,
    Path((week, day)): Path<(WeekType, DayOfWeek)>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    group_week_day_inner(&state, user.require_group()?, week, day).await
}

/// GET /api/students/schedules
pub async fn student_grouped(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
) -> AppResult<Json<GroupedSchedules>> {
    let group_id = user.require_group()?;
    let grouped = ScheduleRepo::grouped_by_group(&state.pool, group_id).await?;
    Ok(Json(grouped))
}

/// GET /api/students/schedules/week/{week}
pub async fn student_by_week(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Path(week): Path<WeekType>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    group_week_inner(&state, user.require_group()?, week).await
}

/// GET /api/students/schedules/week/{week}/day/{day}
pub async fn student_by_week_and_day(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Path((week, day)): Path<(WeekType, DayOfWeek)>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    group_week_day_inner(&state, user.require_group()?, week, day).await
}

// ---------------------------------------------------------------------------
// Teacher-scoped views
// ---------------------------------------------------------------------------

/// GET /api/teachers/schedules
pub async fn teacher_grouped(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
) -> AppResult<Json<GroupedSchedules>> {
    let teacher_id = user.require_teacher()?;
    let grouped = ScheduleRepo::grouped_by_teacher(&state.pool, teacher_id).await?;
    Ok(Json(grouped))
}

/// GET /api/teachers/schedules/week/{week}
pub async fn teacher_by_week(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(week): Path<WeekType>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules =
        ScheduleRepo::actual_by_teacher_and_week(&state.pool, user.require_teacher()?, week)
            .await?;
    Ok(Json(schedules))
}

/// GET /api/teachers/schedules/week/{week}/day/{day}
pub async fn teacher_by_week_and_day(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path((week, day)): Path<(WeekType, DayOfWeek)>,
) -> AppResult<Json<Vec<ScheduleInfo>>> {
    let schedules = ScheduleRepo::actual_by_teacher_week_and_day(
        &state.pool,
        user.require_teacher()?,
        week,
        day,
    )
    .await?;
    Ok(Json(schedules))
}
