//! Repository for the `schedules` table.
//!
//! Read paths join discipline, teacher, discipline-type, and classroom names
//! into [`ScheduleInfo`]. The week-scoped variants only consider actual rows
//! (`is_actual = true`): historical revisions stay queryable by id but never
//! reach the timetable views.

use attendance_core::types::DbId;
use attendance_core::week::{DayOfWeek, WeekType};
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::schedule::{
    group_schedules, CreateSchedule, GroupedSchedules, PatchSchedule, PutSchedule, Schedule,
    ScheduleInfo,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "schedule_id, group_id, discipline_id, teacher_id, discipline_type_id, \
    classroom_id, semester, begin_studies, week_type, day_of_week, start_time, is_actual";

const INFO_SELECT: &str = "SELECT s.schedule_id, s.group_id, s.discipline_id, s.teacher_id, \
    s.discipline_type_id, s.classroom_id, s.semester, s.begin_studies, s.week_type, \
    s.day_of_week, s.start_time, s.is_actual, \
    d.discipline_name, \
    t.last_name AS teacher_last_name, t.first_name AS teacher_first_name, \
    t.middle_name AS teacher_middle_name, \
    dt.discipline_type_name, c.classroom_name \
    FROM schedules s \
    LEFT JOIN disciplines d ON d.discipline_id = s.discipline_id \
    LEFT JOIN teachers t ON t.teacher_id = s.teacher_id \
    LEFT JOIN discipline_types dt ON dt.discipline_type_id = s.discipline_type_id \
    LEFT JOIN classrooms c ON c.classroom_id = s.classroom_id";

pub struct ScheduleRepo;

impl ScheduleRepo {
    pub async fn create(pool: &PgPool, input: &CreateSchedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules
                (group_id, discipline_id, teacher_id, discipline_type_id, classroom_id,
                 semester, begin_studies, week_type, day_of_week, start_time, is_actual)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(&input.group_id)
            .bind(input.discipline_id)
            .bind(input.teacher_id)
            .bind(input.discipline_type_id)
            .bind(input.classroom_id)
            .bind(input.semester)
            .bind(input.begin_studies)
            .bind(input.week_type)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.is_actual)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutSchedule) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                group_id = $2,
                discipline_id = $3,
                teacher_id = $4,
                discipline_type_id = $5,
                classroom_id = $6,
                semester = $7,
                begin_studies = $8,
                week_type = $9,
                day_of_week = $10,
                start_time = $11,
                is_actual = $12
             WHERE schedule_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.schedule_id)
            .bind(&input.group_id)
            .bind(input.discipline_id)
            .bind(input.teacher_id)
            .bind(input.discipline_type_id)
            .bind(input.classroom_id)
            .bind(input.semester)
            .bind(input.begin_studies)
            .bind(input.week_type)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.is_actual)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchSchedule) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("schedules");
        patch.set_if_some("group_id", input.group_id);
        patch.set_if_some("discipline_id", input.discipline_id);
        patch.set_if_some("teacher_id", input.teacher_id);
        patch.set_if_some("discipline_type_id", input.discipline_type_id);
        patch.set_if_some("classroom_id", input.classroom_id);
        patch.set_if_some("semester", input.semester);
        patch.set_if_some("begin_studies", input.begin_studies);
        patch.set_if_some("week_type", input.week_type);
        patch.set_if_some("day_of_week", input.day_of_week);
        patch.set_if_some("start_time", input.start_time);
        patch.set_if_some("is_actual", input.is_actual);
        patch.execute("schedule_id", input.schedule_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE schedule_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ScheduleInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.schedule_id = $1");
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY s.schedule_id");
        sqlx::query_as::<_, ScheduleInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_group(
        pool: &PgPool,
        group_id: &str,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.group_id = $1 ORDER BY s.schedule_id");
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.teacher_id = $1 ORDER BY s.schedule_id");
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// Actual slots of a group for one week type, in timetable order.
    pub async fn actual_by_group_and_week(
        pool: &PgPool,
        group_id: &str,
        week_type: WeekType,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.group_id = $1 AND s.week_type = $2 AND s.is_actual = TRUE
             ORDER BY s.semester, s.week_type, s.day_of_week, s.start_time"
        );
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(group_id)
            .bind(week_type)
            .fetch_all(pool)
            .await
    }

    pub async fn actual_by_group_week_and_day(
        pool: &PgPool,
        group_id: &str,
        week_type: WeekType,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.group_id = $1 AND s.week_type = $2 AND s.day_of_week = $3
             AND s.is_actual = TRUE
             ORDER BY s.start_time"
        );
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(group_id)
            .bind(week_type)
            .bind(day_of_week)
            .fetch_all(pool)
            .await
    }

    pub async fn actual_by_teacher_and_week(
        pool: &PgPool,
        teacher_id: DbId,
        week_type: WeekType,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.teacher_id = $1 AND s.week_type = $2 AND s.is_actual = TRUE
             ORDER BY s.semester, s.week_type, s.day_of_week, s.start_time"
        );
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(teacher_id)
            .bind(week_type)
            .fetch_all(pool)
            .await
    }

    pub async fn actual_by_teacher_week_and_day(
        pool: &PgPool,
        teacher_id: DbId,
        week_type: WeekType,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<ScheduleInfo>, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.teacher_id = $1 AND s.week_type = $2 AND s.day_of_week = $3
             AND s.is_actual = TRUE
             ORDER BY s.start_time"
        );
        sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(teacher_id)
            .bind(week_type)
            .bind(day_of_week)
            .fetch_all(pool)
            .await
    }

    /// Full timetable of a group, nested semester -> week type -> day.
    pub async fn grouped_by_group(
        pool: &PgPool,
        group_id: &str,
    ) -> Result<GroupedSchedules, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.group_id = $1
             ORDER BY s.semester, s.week_type, s.day_of_week, s.start_time"
        );
        let slots = sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await?;
        Ok(group_schedules(slots))
    }

    /// Full timetable of a teacher, nested semester -> week type -> day.
    pub async fn grouped_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<GroupedSchedules, sqlx::Error> {
        let query = format!(
            "{INFO_SELECT} WHERE s.teacher_id = $1
             ORDER BY s.semester, s.week_type, s.day_of_week, s.start_time"
        );
        let slots = sqlx::query_as::<_, ScheduleInfo>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await?;
        Ok(group_schedules(slots))
    }
}
