//! Routes mounted at `/headmans`. Every handler requires the headman role;
//! the acting group always comes from the authenticated account.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{attendance, report, schedule};
use crate::state::AppState;

/// ```text
/// POST /attendances                                batch create
/// PUT  /attendances                                batch replace
/// GET  /attendances/schedule/{id}/date/{date}      group roster for one slot+date
/// GET  /schedules                                  full grouped timetable
/// GET  /schedules/week/{week}                      actual slots for a week type
/// GET  /schedules/week/{week}/day/{day}            actual slots for one day
/// GET  /reports/start/{start_date}/end/{end_date}  attendance report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/attendances",
            post(attendance::headman_create_batch).put(attendance::headman_put_batch),
        )
        .route(
            "/attendances/schedule/{id}/date/{date}",
            get(attendance::headman_roster),
        )
        .route("/schedules", get(schedule::headman_grouped))
        .route("/schedules/week/{week}", get(schedule::headman_by_week))
        .route(
            "/schedules/week/{week}/day/{day}",
            get(schedule::headman_by_week_and_day),
        )
        .route(
            "/reports/start/{start_date}/end/{end_date}",
            get(report::headman_report),
        )
}
