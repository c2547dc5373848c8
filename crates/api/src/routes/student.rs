//! Routes mounted at `/students`. Read-only timetable views for the
//! student's own group.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// ```text
/// GET /schedules                         full grouped timetable
/// GET /schedules/week/{week}             actual slots for a week type
/// GET /schedules/week/{week}/day/{day}   actual slots for one day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedules", get(schedule::student_grouped))
        .route("/schedules/week/{week}", get(schedule::student_by_week))
        .route(
            "/schedules/week/{week}/day/{day}",
            get(schedule::student_by_week_and_day),
        )
}
