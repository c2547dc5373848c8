//! Routes mounted at `/teachers`. Attendance recording for any group the
//! teacher covers, plus the teacher's own timetable views.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{attendance, schedule};
use crate::state::AppState;

/// ```text
/// POST /attendances                                                batch create
/// PUT  /attendances                                                batch replace
/// GET  /attendances/group/{group_id}/schedule/{id}/date/{date}     group roster
/// GET  /schedules                                                  full grouped timetable
/// GET  /schedules/week/{week}                                      actual slots for a week type
/// GET  /schedules/week/{week}/day/{day}                            actual slots for one day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/attendances",
            post(attendance::teacher_create_batch).put(attendance::teacher_put_batch),
        )
        .route(
            "/attendances/group/{group_id}/schedule/{id}/date/{date}",
            get(attendance::teacher_roster),
        )
        .route("/schedules", get(schedule::teacher_grouped))
        .route("/schedules/week/{week}", get(schedule::teacher_by_week))
        .route(
            "/schedules/week/{week}/day/{day}",
            get(schedule::teacher_by_week_and_day),
        )
}
