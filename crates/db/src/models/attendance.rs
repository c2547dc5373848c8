//! Attendance entity model and DTOs.
//!
//! The three flags are independently tri-state: `None` means "not yet
//! recorded", which is distinct from an explicit `false`.

use attendance_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::double_option;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Attendance {
    pub attendance_id: DbId,
    pub student_id: DbId,
    pub schedule_id: DbId,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
    pub created: Date,
}

/// Read-side row enriched with the student's full name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceInfo {
    pub attendance_id: DbId,
    pub student_id: DbId,
    pub schedule_id: DbId,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
    pub created: Date,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

/// One roster line of the per-group, per-slot, per-date view: every student
/// of the group appears; the attendance columns are null for students with
/// no record yet on that date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupAttendanceRow {
    pub attendance_id: Option<DbId>,
    pub student_id: DbId,
    pub schedule_id: Option<DbId>,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
    pub created: Option<Date>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub group_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendance {
    pub student_id: DbId,
    pub schedule_id: DbId,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
    pub created: Date,
}

/// Replaces the recorded flags and reason of an existing row. The row's
/// student/schedule/date identity is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct PutAttendance {
    pub attendance_id: DbId,
    pub presence: Option<bool>,
    pub late_arrival: Option<bool>,
    pub respectfulness: Option<bool>,
    pub reason: Option<String>,
}

/// Partial update. For the nullable columns the outer option distinguishes
/// "absent from the request" from an explicit `null` that clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAttendance {
    #[serde(default)]
    pub student_id: Option<DbId>,
    #[serde(default)]
    pub schedule_id: Option<DbId>,
    #[serde(default, deserialize_with = "double_option")]
    pub presence: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub late_arrival: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub respectfulness: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub reason: Option<Option<String>>,
    #[serde(default)]
    pub created: Option<Date>,
}

/// Patch request body: the key plus the fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchAttendanceRequest {
    pub attendance_id: DbId,
    #[serde(flatten)]
    pub fields: PatchAttendance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_missing_null_and_value() {
        let patch: PatchAttendanceRequest = serde_json::from_str(
            r#"{"attendance_id":9,"presence":true,"reason":null}"#,
        )
        .unwrap();
        assert_eq!(patch.fields.presence, Some(Some(true)));
        assert_eq!(patch.fields.reason, Some(None), "explicit null clears");
        assert_eq!(patch.fields.late_arrival, None, "absent field is skipped");
    }
}
