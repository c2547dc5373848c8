//! HTTP-level tests for sign-in, the role gate, and conflict classification.

mod common;

use attendance_core::roles::Role;
use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use sqlx::PgPool;

/// Successful sign-in returns an access token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signin_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let password = common::create_test_user(&pool, "admin1", Role::Admin, None, None, None).await;

    let token = common::signin(&app, "admin1", &password).await;
    assert!(!token.is_empty());
}

/// Wrong password and unknown username both return the same 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signin_rejects_bad_credentials(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    common::create_test_user(&pool, "admin1", Role::Admin, None, None, None).await;

    let response = post_json(
        &app,
        "/api/auth/signin",
        serde_json::json!({ "username": "admin1", "password": "incorrect" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        &app,
        "/api/auth/signin",
        serde_json::json!({ "username": "ghost", "password": "whatever" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Admin routes reject requests without a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/admins/universities", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A student token on an admin route is rejected at the gate with 403,
/// regardless of token validity.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_student_cannot_reach_admin_routes(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let password =
        common::create_test_user(&pool, "student1", Role::Student, None, Some(2), None).await;
    let token = common::signin(&app, "student1", &password).await;

    let response = get(&app, "/api/admins/universities", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The student's own route group still works with the same token.
    let response = get(&app, "/api/students/schedules", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Creating a second account for the same student yields a 409 classified
/// by the student-link constraint.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_student_link_is_classified_conflict(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let password = common::create_test_user(&pool, "admin1", Role::Admin, None, None, None).await;
    common::create_test_user(&pool, "taken", Role::Student, None, Some(1), None).await;
    let token = common::signin(&app, "admin1", &password).await;

    let response = post_json(
        &app,
        "/api/admins/users",
        serde_json::json!({
            "username": "second",
            "password": "TestPass#1",
            "user_role": "Студент",
            "student_id": 1,
        }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_EXISTS_STUDENT");
}

/// A user whose role does not match its link columns is rejected up front.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_role_link_mismatch_is_validation_error(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let password = common::create_test_user(&pool, "admin1", Role::Admin, None, None, None).await;
    let token = common::signin(&app, "admin1", &password).await;

    // Role student, but no student link.
    let response = post_json(
        &app,
        "/api/admins/users",
        serde_json::json!({
            "username": "nolink",
            "password": "TestPass#1",
            "user_role": "Студент",
        }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A patch carrying only the key is answered with the no-updates error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_without_fields_is_rejected(pool: PgPool) {
    common::seed_hierarchy(&pool).await;
    let app = common::build_test_app(pool.clone());
    let password = common::create_test_user(&pool, "admin1", Role::Admin, None, None, None).await;
    let token = common::signin(&app, "admin1", &password).await;

    let response = patch_json(
        &app,
        "/api/admins/classrooms",
        serde_json::json!({ "classroom_id": 1 }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_UPDATES");
}
