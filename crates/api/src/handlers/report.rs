//! Handler for the headman attendance report.

use attendance_core::error::CoreError;
use attendance_core::types::Date;
use attendance_db::models::report::AttendanceReport;
use attendance_db::repositories::ReportRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireHeadman;
use crate::state::AppState;

/// GET /api/headmans/reports/start/{start_date}/end/{end_date}
///
/// The group is derived from the authenticated headman. A group with an
/// incomplete organizational hierarchy yields 404; a range with no
/// attendance yields a valid header and an empty data array.
pub async fn headman_report(
    State(state): State<AppState>,
    RequireHeadman(user): RequireHeadman,
    Path((start_date, end_date)): Path<(Date, Date)>,
) -> AppResult<Json<AttendanceReport>> {
    let group_id = user.require_group()?;
    state.rules.group_id(group_id)?;
    if start_date > end_date {
        return Err(AppError::Core(CoreError::Validation(
            "start_date must not be after end_date".into(),
        )));
    }

    let report = ReportRepo::actual_report(&state.pool, group_id, start_date, end_date).await?;
    Ok(Json(report))
}
