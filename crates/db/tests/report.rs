//! Report aggregator and roster integration tests.

mod common;

use assert_matches::assert_matches;
use attendance_db::models::attendance::CreateAttendance;
use attendance_db::repositories::{AttendanceRepo, ReportRepo};
use chrono::NaiveDate;
use sqlx::PgPool;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
}

async fn record(
    pool: &PgPool,
    student_id: i64,
    schedule_id: i64,
    presence: Option<bool>,
    day: u32,
) {
    AttendanceRepo::create(
        pool,
        &CreateAttendance {
            student_id,
            schedule_id,
            presence,
            late_arrival: None,
            respectfulness: None,
            reason: None,
            created: date(day),
        },
    )
    .await
    .expect("attendance row");
}

/// Rows are filtered to the requested range, but the attached percentage is
/// the lifetime ratio of the (student, schedule) pair.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_range_rows_carry_lifetime_percentage(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;

    // Lifetime history: 3 visits, 1 pass => 75.00% over 4 recorded rows.
    record(&pool, student.student_id, schedule.schedule_id, Some(true), 3).await;
    record(&pool, student.student_id, schedule.schedule_id, Some(true), 10).await;
    record(&pool, student.student_id, schedule.schedule_id, Some(false), 17).await;
    record(&pool, student.student_id, schedule.schedule_id, Some(true), 24).await;

    // Range covers only the middle two dates.
    let report = ReportRepo::actual_report(&pool, common::GROUP_ID, date(10), date(17))
        .await
        .unwrap();

    assert_eq!(report.report_head.group_id, common::GROUP_ID);
    assert_eq!(report.report_head.university_name, "ОГАУ");
    assert_eq!(report.report_head.specialty_name, "Информатика");

    assert_eq!(report.report_data.len(), 2, "only in-range rows are listed");
    for row in &report.report_data {
        assert!(row.created >= date(10) && row.created <= date(17));
        assert_eq!(row.visits, 3);
        assert_eq!(row.passes, 1);
        assert_eq!(row.total, 4);
        assert_eq!(row.percentage_of_visits, 75.00);
        assert_eq!(row.student_name, "Иванов Иван Иванович");
    }
}

/// The range is inclusive on both ends.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_range_is_inclusive(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;

    record(&pool, student.student_id, schedule.schedule_id, Some(true), 10).await;
    record(&pool, student.student_id, schedule.schedule_id, Some(true), 12).await;

    let report = ReportRepo::actual_report(&pool, common::GROUP_ID, date(10), date(12))
        .await
        .unwrap();
    assert_eq!(report.report_data.len(), 2);
}

/// Unrecorded presence (NULL) contributes to neither visits nor total.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_ignores_unrecorded_presence_in_counters(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;

    record(&pool, student.student_id, schedule.schedule_id, Some(true), 3).await;
    record(&pool, student.student_id, schedule.schedule_id, None, 10).await;

    let report = ReportRepo::actual_report(&pool, common::GROUP_ID, date(1), date(30))
        .await
        .unwrap();

    assert_eq!(report.report_data.len(), 2);
    for row in &report.report_data {
        assert_eq!(row.visits, 1);
        assert_eq!(row.passes, 0);
        assert_eq!(row.total, 1, "NULL presence is not counted");
        assert_eq!(row.percentage_of_visits, 100.00);
    }
}

/// An unknown group has no hierarchy header: the miss propagates.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_unknown_group_is_not_found(pool: PgPool) {
    common::seed_hierarchy(&pool).await;

    let result = ReportRepo::actual_report(&pool, "9999-99.99.99-9", date(1), date(30)).await;
    assert_matches!(result, Err(sqlx::Error::RowNotFound));
}

/// No attendance in range: valid header, empty data, no error.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_empty_range_yields_header_only(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;
    record(&pool, student.student_id, schedule.schedule_id, Some(true), 3).await;

    let report = ReportRepo::actual_report(&pool, common::GROUP_ID, date(20), date(25))
        .await
        .unwrap();
    assert_eq!(report.report_head.group_id, common::GROUP_ID);
    assert!(report.report_data.is_empty());
}

/// Report rows come out ordered by student last name.
#[sqlx::test(migrations = "./migrations")]
async fn test_report_orders_by_student_last_name(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;
    let anton = common::seed_student(&pool, &hierarchy.group_id, "Яковлев").await;
    let boris = common::seed_student(&pool, &hierarchy.group_id, "Абрамов").await;

    record(&pool, anton.student_id, schedule.schedule_id, Some(true), 10).await;
    record(&pool, boris.student_id, schedule.schedule_id, Some(false), 10).await;

    let report = ReportRepo::actual_report(&pool, common::GROUP_ID, date(1), date(30))
        .await
        .unwrap();
    let names: Vec<&str> = report
        .report_data
        .iter()
        .map(|r| r.student_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Абрамов Иван Иванович", "Яковлев Иван Иванович"]
    );
}

/// Every student of the group appears in the roster; those without a record
/// on the date come back with null attendance columns.
#[sqlx::test(migrations = "./migrations")]
async fn test_roster_lists_whole_group(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;
    let present = common::seed_student(&pool, &hierarchy.group_id, "Борисов").await;
    let absent = common::seed_student(&pool, &hierarchy.group_id, "Андреев").await;

    record(&pool, present.student_id, schedule.schedule_id, Some(true), 10).await;
    // A record on another date must not leak into the roster for day 10.
    record(&pool, absent.student_id, schedule.schedule_id, Some(true), 11).await;

    let roster = AttendanceRepo::list_group_by_schedule_and_date(
        &pool,
        common::GROUP_ID,
        schedule.schedule_id,
        date(10),
    )
    .await
    .unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].last_name, "Андреев");
    assert!(roster[0].attendance_id.is_none());
    assert!(roster[0].presence.is_none());
    assert_eq!(roster[1].last_name, "Борисов");
    assert_eq!(roster[1].presence, Some(true));
    assert_eq!(roster[1].created, Some(date(10)));
}
