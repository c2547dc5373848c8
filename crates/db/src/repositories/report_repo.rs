//! Attendance report aggregation.
//!
//! Two statements: a strict inner-join walk down the organizational
//! hierarchy for the header, and a range-filtered detail query that attaches
//! per-(student, schedule) lifetime counters computed by the `subatt` CTE.
//!
//! The counters are intentionally aggregated over ALL attendance history of
//! each (student, schedule) pair, not just the requested range; the report
//! shows range rows with the all-time visit percentage attached. The inner
//! join on `subatt` also guarantees `total >= 1` for every emitted row, so
//! the percentage division cannot see a zero denominator.

use attendance_core::types::Date;
use sqlx::PgPool;

use crate::models::report::{AttendanceReport, ReportData, ReportHead};

const HEAD_QUERY: &str = "SELECT
    u.university_name,
    u.head_last_name || ' ' || u.head_first_name || ' ' || u.head_middle_name AS university_head,
    f.faculty_name,
    f.head_last_name || ' ' || f.head_first_name || ' ' || f.head_middle_name AS faculty_head,
    d.departament_name,
    d.head_last_name || ' ' || d.head_first_name || ' ' || d.head_middle_name AS departament_head,
    g.group_id,
    s.specialty_name,
    e.education_level_name,
    p.profile_name,
    et.education_type_name
FROM universities u
INNER JOIN faculties f ON f.university_id = u.university_id
INNER JOIN departaments d ON d.faculty_id = f.faculty_id
INNER JOIN specialties s ON s.departament_id = d.departament_id
INNER JOIN education_levels e ON e.education_level_id = s.education_level_id
INNER JOIN profiles p ON p.specialty_code = s.specialty_code
INNER JOIN education_types et ON et.education_type_id = p.education_type_id
INNER JOIN groups g ON g.profile_id = p.profile_id AND g.group_id = $1";

const DATA_QUERY: &str = "WITH subatt AS (
    SELECT
        t.student_id,
        t.schedule_id,
        COUNT(*) FILTER (WHERE t.presence = false) AS passes,
        COUNT(*) FILTER (WHERE t.presence = true) AS visits,
        COUNT(t.presence) AS total,
        ROUND(CAST(COUNT(*) FILTER (WHERE t.presence = true) * 100.0
                   / COUNT(t.presence) AS NUMERIC), 2) AS percentage_of_visits
    FROM attendance t
    GROUP BY t.student_id, t.schedule_id
)
SELECT
    sch.semester,
    sch.week_type,
    sch.day_of_week,
    dis.discipline_name,
    dtype.discipline_type_name,
    sch.start_time,
    cr.classroom_name,
    teach.last_name || ' ' || teach.first_name || ' ' || teach.middle_name AS teacher_name,
    st.last_name || ' ' || st.first_name || ' ' || st.middle_name AS student_name,
    at.presence,
    at.late_arrival,
    at.respectfulness,
    at.reason,
    COALESCE(subatt.visits, 0) AS visits,
    COALESCE(subatt.passes, 0) AS passes,
    COALESCE(subatt.total, 0) AS total,
    COALESCE(subatt.percentage_of_visits, 0)::float8 AS percentage_of_visits,
    at.created
FROM attendance at
INNER JOIN students st ON st.student_id = at.student_id AND st.group_id = $1
INNER JOIN schedules sch ON sch.schedule_id = at.schedule_id
INNER JOIN discipline_types dtype ON dtype.discipline_type_id = sch.discipline_type_id
INNER JOIN classrooms cr ON cr.classroom_id = sch.classroom_id
INNER JOIN disciplines dis ON dis.discipline_id = sch.discipline_id
INNER JOIN teachers teach ON teach.teacher_id = sch.teacher_id
INNER JOIN subatt ON subatt.student_id = at.student_id AND subatt.schedule_id = at.schedule_id
WHERE at.created >= $2 AND at.created <= $3
GROUP BY
    sch.semester,
    sch.week_type,
    sch.day_of_week,
    sch.start_time,
    dis.discipline_name,
    dtype.discipline_type_name,
    cr.classroom_name,
    teach.last_name, teach.first_name, teach.middle_name,
    st.last_name, st.first_name, st.middle_name,
    at.presence,
    at.late_arrival,
    at.respectfulness,
    at.reason,
    subatt.visits,
    subatt.passes,
    subatt.total,
    subatt.percentage_of_visits,
    at.created
ORDER BY st.last_name ASC";

pub struct ReportRepo;

impl ReportRepo {
    /// Build the report for one group over the closed date range
    /// [`start`, `end`].
    ///
    /// A group with an incomplete hierarchy yields `RowNotFound` from the
    /// header query; a range with no attendance rows yields a valid header
    /// with empty data.
    pub async fn actual_report(
        pool: &PgPool,
        group_id: &str,
        start: Date,
        end: Date,
    ) -> Result<AttendanceReport, sqlx::Error> {
        let report_head = sqlx::query_as::<_, ReportHead>(HEAD_QUERY)
            .bind(group_id)
            .fetch_one(pool)
            .await?;

        let report_data = sqlx::query_as::<_, ReportData>(DATA_QUERY)
            .bind(group_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?;

        Ok(AttendanceReport {
            report_head,
            report_data,
        })
    }
}
