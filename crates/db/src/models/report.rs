//! Attendance report rows.
//!
//! `ReportHead` is the static organizational-hierarchy header; `ReportData`
//! carries one line per attendance record in the requested range, with the
//! per-(student, schedule) lifetime counters attached.

use attendance_core::types::{Date, TimeOfDay};
use attendance_core::week::{DayOfWeek, WeekType};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceReport {
    pub report_head: ReportHead,
    pub report_data: Vec<ReportData>,
}

/// Resolved by the strict inner-join walk university -> faculty ->
/// departament -> specialty -> education level -> profile -> education type
/// -> group. A group with any missing link has no header and no report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportHead {
    pub university_name: String,
    pub university_head: String,
    pub faculty_name: String,
    pub faculty_head: String,
    pub departament_name: String,
    pub departament_head: String,
    pub group_id: String,
    pub specialty_name: String,
    pub education_level_name: String,
    pub profile_name: String,
    pub education_type_name: String,
}

/// One report line. `visits`/`passes`/`total`/`percentage_of_visits` are
/// aggregated over the full history of the (student, schedule) pair, not the
/// requested range.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportData {
    pub semester: i32,
    pub week_type: WeekType,
    pub day_of_week: DayOfWeek,
    pub discipline_name: String,
    pub discipline_type_name: String,
    #[serde(with = "attendance_core::types::hh_mm")]
    pub start_time: TimeOfDay,
    pub classroom_name: String,
    pub teacher_name: String,
    pub student_name: String,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
    pub visits: i64,
    pub passes: i64,
    pub total: i64,
    pub percentage_of_visits: f64,
    pub created: Date,
}
