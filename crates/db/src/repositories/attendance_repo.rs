//! Repository for the `attendance` table.

use attendance_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::attendance::{
    Attendance, AttendanceInfo, CreateAttendance, GroupAttendanceRow, PatchAttendance,
    PutAttendance,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "attendance_id, student_id, schedule_id, presence, late_arrival, \
    respectfulness, reason, created";

const INFO_SELECT: &str = "SELECT a.attendance_id, a.student_id, a.schedule_id, a.presence, \
    a.late_arrival, a.respectfulness, a.reason, a.created, \
    s.last_name, s.first_name, s.middle_name \
    FROM attendance a \
    LEFT JOIN students s ON s.student_id = a.student_id";

pub struct AttendanceRepo;

impl AttendanceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttendance,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance
                (student_id, schedule_id, presence, late_arrival, respectfulness, reason, created)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(input.student_id)
            .bind(input.schedule_id)
            .bind(input.presence)
            .bind(input.late_arrival)
            .bind(input.respectfulness)
            .bind(&input.reason)
            .bind(input.created)
            .fetch_one(pool)
            .await
    }

    /// Replace the recorded flags and reason. The row's student, schedule,
    /// and date are identity and stay untouched.
    pub async fn put(pool: &PgPool, input: &PutAttendance) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attendance SET
                presence = $2,
                late_arrival = $3,
                respectfulness = $4,
                reason = $5
             WHERE attendance_id = $1",
        )
        .bind(input.attendance_id)
        .bind(input.presence)
        .bind(input.late_arrival)
        .bind(input.respectfulness)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn patch(
        pool: &PgPool,
        attendance_id: DbId,
        input: PatchAttendance,
    ) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("attendance");
        patch.set_if_some("student_id", input.student_id);
        patch.set_if_some("schedule_id", input.schedule_id);
        patch.set_nullable("presence", input.presence);
        patch.set_nullable("late_arrival", input.late_arrival);
        patch.set_nullable("respectfulness", input.respectfulness);
        patch.set_nullable("reason", input.reason);
        patch.set_if_some("created", input.created);
        patch.execute("attendance_id", attendance_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance WHERE attendance_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttendanceInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE a.attendance_id = $1");
        sqlx::query_as::<_, AttendanceInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AttendanceInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY a.attendance_id");
        sqlx::query_as::<_, AttendanceInfo>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<AttendanceInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE a.student_id = $1 ORDER BY a.created");
        sqlx::query_as::<_, AttendanceInfo>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Roster view for one (group, schedule, date): every student of the
    /// group appears exactly once; attendance columns are null for students
    /// with no record on that date yet.
    pub async fn list_group_by_schedule_and_date(
        pool: &PgPool,
        group_id: &str,
        schedule_id: DbId,
        created: Date,
    ) -> Result<Vec<GroupAttendanceRow>, sqlx::Error> {
        let query = "SELECT
            a.attendance_id,
            s.student_id,
            a.schedule_id,
            a.presence,
            a.late_arrival,
            a.respectfulness,
            a.reason,
            a.created,
            s.last_name,
            s.first_name,
            s.middle_name,
            s.group_id
        FROM students s
        LEFT JOIN attendance a
            ON a.student_id = s.student_id
            AND a.schedule_id = $2
            AND a.created = $3
        WHERE s.group_id = $1
        ORDER BY s.last_name";
        sqlx::query_as::<_, GroupAttendanceRow>(query)
            .bind(group_id)
            .bind(schedule_id)
            .bind(created)
            .fetch_all(pool)
            .await
    }
}
