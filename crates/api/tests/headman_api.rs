//! HTTP-level tests for the headman route group: roster, report, timetable.

mod common;

use attendance_core::roles::Role;
use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn headman_token(pool: &PgPool, app: &axum::Router) -> String {
    let password = common::create_test_user(pool, "headman1", Role::Headman, Some(1), None, None).await;
    common::signin(app, "headman1", &password).await
}

/// The roster endpoint returns only the headman's own group, for the given
/// schedule and date. Students without a record appear with null columns.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_roster_is_scoped_to_own_group_schedule_and_date(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    sqlx::raw_sql(
        "INSERT INTO students (student_id, group_id, last_name, first_name, middle_name)
         VALUES (3, '2101-09.03.01-1', 'Андреев', 'Андрей', 'Андреевич');
         INSERT INTO attendance (student_id, schedule_id, presence, created)
         VALUES (1, 5, true, '2024-09-10');
         INSERT INTO attendance (student_id, schedule_id, presence, created)
         VALUES (1, 5, false, '2024-09-17');",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = get(
        &app,
        "/api/headmans/attendances/schedule/5/date/2024-09-10",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let rows = json.as_array().expect("roster must be an array");
    assert_eq!(rows.len(), 2, "both group members, nobody else");
    for row in rows {
        assert_eq!(row["group_id"], common::GROUP_ID);
    }
    // Ordered by last name: Андреев (no record), then Иванов (present).
    assert_eq!(rows[0]["last_name"], "Андреев");
    assert!(rows[0]["attendance_id"].is_null());
    assert_eq!(rows[1]["last_name"], "Иванов");
    assert_eq!(rows[1]["presence"], true);
    assert_eq!(rows[1]["created"], "2024-09-10");
}

/// Batch create writes one row per item; the roster reflects them.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_batch_create_then_roster(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = post_json(
        &app,
        "/api/headmans/attendances",
        serde_json::json!({
            "attendances": [
                {
                    "student_id": 1,
                    "schedule_id": 5,
                    "presence": true,
                    "created": "2024-09-10",
                },
            ]
        }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created.as_array().unwrap().len(), 1);

    let response = get(
        &app,
        "/api/headmans/attendances/schedule/5/date/2024-09-10",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json[0]["presence"], true);
}

/// A batch item with a non-cyrillic reason fails validation before any row
/// is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_batch_create_validates_before_writing(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = post_json(
        &app,
        "/api/headmans/attendances",
        serde_json::json!({
            "attendances": [
                { "student_id": 1, "schedule_id": 5, "presence": true, "created": "2024-09-10" },
                { "student_id": 1, "schedule_id": 5, "reason": "sick", "created": "2024-09-10" },
            ]
        }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "validation failure must precede all writes");
}

/// The report endpoint returns the hierarchy header and range-filtered rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_report_endpoint(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    sqlx::raw_sql(
        "INSERT INTO attendance (student_id, schedule_id, presence, created)
         VALUES (1, 5, true, '2024-09-10');
         INSERT INTO attendance (student_id, schedule_id, presence, created)
         VALUES (1, 5, false, '2024-10-01');",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = get(
        &app,
        "/api/headmans/reports/start/2024-09-01/end/2024-09-30",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["report_head"]["group_id"], common::GROUP_ID);
    assert_eq!(json["report_head"]["university_name"], "ОГАУ");
    assert_eq!(
        json["report_head"]["university_head"],
        "Ректоров Ректор Ректорович"
    );

    let rows = json["report_data"].as_array().unwrap();
    assert_eq!(rows.len(), 1, "only the September row is in range");
    // Lifetime counters: 1 visit + 1 pass over 2 recorded rows.
    assert_eq!(rows[0]["visits"], 1);
    assert_eq!(rows[0]["passes"], 1);
    assert_eq!(rows[0]["total"], 2);
    assert_eq!(rows[0]["percentage_of_visits"], 50.0);
}

/// An inverted range is rejected up front.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_report_rejects_inverted_range(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = get(
        &app,
        "/api/headmans/reports/start/2024-09-30/end/2024-09-01",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The timetable week view returns only actual slots of the own group, and
/// the week-type path segment accepts the cyrillic vocabulary.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_week_timetable(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = headman_token(&pool, &app).await;

    let response = get(
        &app,
        "/api/headmans/schedules/week/%D0%92%D0%B5%D1%80%D1%85%D0%BD%D1%8F%D1%8F",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let slots = json.as_array().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["schedule_id"], common::SCHEDULE_ID);
    assert_eq!(slots[0]["discipline_name"], "Математика");
    assert_eq!(slots[0]["start_time"], "08:00");

    // The lower week has no slots.
    let response = get(
        &app,
        "/api/headmans/schedules/week/%D0%9D%D0%B8%D0%B6%D0%BD%D1%8F%D1%8F",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
