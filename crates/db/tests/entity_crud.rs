//! Repository-level integration tests: create/get round trips, put/patch
//! semantics, and unique-constraint classification.

mod common;

use assert_matches::assert_matches;
use attendance_core::roles::Role;
use attendance_db::models::attendance::{CreateAttendance, PatchAttendance};
use attendance_db::models::classroom::PatchClassroom;
use attendance_db::models::university::{CreateUniversity, PatchUniversity, PutUniversity};
use attendance_db::models::user::CreateUser;
use attendance_db::repositories::{
    AttendanceRepo, ClassroomRepo, UniversityRepo, UserRepo,
};
use attendance_db::DbError;
use chrono::NaiveDate;
use sqlx::PgPool;

fn new_university(name: &str) -> CreateUniversity {
    CreateUniversity {
        university_name: name.into(),
        head_last_name: "Ректоров".into(),
        head_first_name: "Ректор".into(),
        head_middle_name: "Ректорович".into(),
        university_email: "rector@test".into(),
    }
}

/// Create followed by get returns the same row.
#[sqlx::test(migrations = "./migrations")]
async fn test_create_get_round_trip(pool: PgPool) {
    let created = UniversityRepo::create(&pool, &new_university("ОГАУ"))
        .await
        .unwrap();

    let fetched = UniversityRepo::find_by_id(&pool, created.university_id)
        .await
        .unwrap()
        .expect("created row must be found");

    assert_eq!(fetched, created);
}

/// Patch touches only the supplied columns.
#[sqlx::test(migrations = "./migrations")]
async fn test_patch_updates_only_supplied_fields(pool: PgPool) {
    let created = UniversityRepo::create(&pool, &new_university("ОГАУ"))
        .await
        .unwrap();

    let affected = UniversityRepo::patch(
        &pool,
        PatchUniversity {
            university_id: created.university_id,
            university_name: Some("РГАУ".into()),
            head_last_name: None,
            head_first_name: None,
            head_middle_name: None,
            university_email: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(affected, 1);

    let fetched = UniversityRepo::find_by_id(&pool, created.university_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.university_name, "РГАУ");
    assert_eq!(fetched.head_last_name, created.head_last_name);
    assert_eq!(fetched.university_email, created.university_email);
}

/// A patch carrying only the key is rejected before any statement is issued.
#[sqlx::test(migrations = "./migrations")]
async fn test_patch_with_no_fields_is_no_updates(pool: PgPool) {
    let classroom = ClassroomRepo::create(
        &pool,
        &attendance_db::models::classroom::CreateClassroom {
            classroom_name: "301".into(),
        },
    )
    .await
    .unwrap();

    let result = ClassroomRepo::patch(
        &pool,
        PatchClassroom {
            classroom_id: classroom.classroom_id,
            classroom_name: None,
        },
    )
    .await;

    assert_matches!(result, Err(DbError::NoUpdates));

    let fetched = ClassroomRepo::find_by_id(&pool, classroom.classroom_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.classroom_name, "301");
}

/// Put on a missing key reports the miss instead of inventing a row.
#[sqlx::test(migrations = "./migrations")]
async fn test_put_missing_row_returns_none(pool: PgPool) {
    let result = UniversityRepo::put(
        &pool,
        &PutUniversity {
            university_id: 4242,
            university_name: "Нет".into(),
            head_last_name: "Нет".into(),
            head_first_name: "Нет".into(),
            head_middle_name: "Нет".into(),
            university_email: "none@test".into(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

/// Duplicate username violates uq_users_username; the constraint name is the
/// classification signal.
#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_username_hits_named_constraint(pool: PgPool) {
    let input = CreateUser {
        username: "admin1".into(),
        password: "hash".into(),
        role: Role::Admin,
        headman_id: None,
        student_id: None,
        teacher_id: None,
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

/// Two accounts may not claim the same student.
#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_student_link_hits_named_constraint(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;

    let first = CreateUser {
        username: "student1".into(),
        password: "hash".into(),
        role: Role::Student,
        headman_id: None,
        student_id: Some(student.student_id),
        teacher_id: None,
    };
    UserRepo::create(&pool, &first).await.unwrap();

    let second = CreateUser {
        username: "student2".into(),
        ..first
    };
    let err = UserRepo::create(&pool, &second).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_student_id"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

/// An explicit null in a patch clears the column; an absent field leaves it.
#[sqlx::test(migrations = "./migrations")]
async fn test_patch_attendance_clears_nullable_field(pool: PgPool) {
    let hierarchy = common::seed_hierarchy(&pool).await;
    let student = common::seed_student(&pool, &hierarchy.group_id, "Иванов").await;
    let schedule = common::seed_schedule(&pool, &hierarchy).await;

    let attendance = AttendanceRepo::create(
        &pool,
        &CreateAttendance {
            student_id: student.student_id,
            schedule_id: schedule.schedule_id,
            presence: Some(false),
            late_arrival: None,
            respectfulness: Some(true),
            reason: Some("По болезни".into()),
            created: NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
        },
    )
    .await
    .unwrap();

    let affected = AttendanceRepo::patch(
        &pool,
        attendance.attendance_id,
        PatchAttendance {
            reason: Some(None),
            presence: Some(Some(true)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(affected, 1);

    let fetched = AttendanceRepo::find_by_id(&pool, attendance.attendance_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.reason, None, "explicit null cleared the reason");
    assert_eq!(fetched.presence, Some(true));
    assert_eq!(
        fetched.respectfulness,
        Some(true),
        "absent field stayed untouched"
    );
}
