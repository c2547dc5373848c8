//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application router exactly as `main.rs` does (same middleware
//! stack) over the `#[sqlx::test]`-provided pool, and offers small request
//! helpers driving the router through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use attendance_api::auth::jwt::JwtConfig;
use attendance_api::auth::password::hash_password;
use attendance_api::config::ServerConfig;
use attendance_api::router::build_app_router;
use attendance_api::state::AppState;
use attendance_core::roles::Role;
use attendance_core::validation::ValidationRules;
use attendance_db::models::user::CreateUser;
use attendance_db::repositories::UserRepo;

pub const GROUP_ID: &str = "2101-09.03.01-1";
pub const SCHEDULE_ID: i64 = 5;

/// Build a test `ServerConfig` with a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        rules: Arc::new(ValidationRules::new()),
    };
    build_app_router(state, &config)
}

/// Seed a complete organizational hierarchy ending in two groups of the same
/// profile, one student + headman in the first group, and schedule
/// [`SCHEDULE_ID`] for the first group.
pub async fn seed_hierarchy(pool: &PgPool) {
    sqlx::raw_sql(
        "INSERT INTO universities
            (university_id, university_name, head_last_name, head_first_name, head_middle_name, university_email)
         VALUES (1, 'ОГАУ', 'Ректоров', 'Ректор', 'Ректорович', 'rector@osau.test');
         INSERT INTO faculties
            (faculty_id, university_id, faculty_name, head_last_name, head_first_name, head_middle_name, faculty_email)
         VALUES (1, 1, 'Факультет информатики', 'Деканов', 'Декан', 'Деканович', 'dean@osau.test');
         INSERT INTO departaments
            (departament_id, faculty_id, departament_name, head_last_name, head_first_name, head_middle_name, departament_email)
         VALUES (1, 1, 'Кафедра программирования', 'Заведующий', 'Завкаф', 'Завкафович', 'dept@osau.test');
         INSERT INTO teachers (teacher_id, departament_id, last_name, first_name, middle_name, teacher_email)
         VALUES (1, 1, 'Преподаватель', 'Петр', 'Петрович', 'teacher@osau.test');
         INSERT INTO disciplines (discipline_id, departament_id, discipline_name)
         VALUES (1, 1, 'Математика');
         INSERT INTO discipline_types (discipline_type_id, discipline_type_name) VALUES (1, 'Лекция');
         INSERT INTO classrooms (classroom_id, classroom_name) VALUES (1, '301');
         INSERT INTO education_levels (education_level_id, education_level_name) VALUES (1, 'Бакалавриат');
         INSERT INTO education_types (education_type_id, education_type_name) VALUES (1, 'Очная');
         INSERT INTO specialties (specialty_code, specialty_name, departament_id, education_level_id)
         VALUES ('09.03.01', 'Информатика', 1, 1);
         INSERT INTO profiles (profile_id, specialty_code, education_type_id, profile_name)
         VALUES (1, '09.03.01', 1, 'Разработка ПО');
         INSERT INTO groups (group_id, profile_id) VALUES ('2101-09.03.01-1', 1);
         INSERT INTO groups (group_id, profile_id) VALUES ('2101-09.03.01-2', 1);
         INSERT INTO students (student_id, group_id, last_name, first_name, middle_name)
         VALUES (1, '2101-09.03.01-1', 'Иванов', 'Иван', 'Иванович');
         INSERT INTO students (student_id, group_id, last_name, first_name, middle_name)
         VALUES (2, '2101-09.03.01-2', 'Чужаков', 'Чужой', 'Чужакович');
         INSERT INTO headmans (headman_id, student_id, group_id) VALUES (1, 1, '2101-09.03.01-1');
         INSERT INTO schedules
            (schedule_id, group_id, discipline_id, teacher_id, discipline_type_id, classroom_id,
             semester, begin_studies, week_type, day_of_week, start_time, is_actual)
         VALUES (5, '2101-09.03.01-1', 1, 1, 1, 1, 1, '2024-09-01', 'Верхняя', 'Вторник', '08:00', true);",
    )
    .execute(pool)
    .await
    .expect("seed hierarchy");
}

/// Create a user directly in the database; returns the plaintext password.
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    role: Role,
    headman_id: Option<i64>,
    student_id: Option<i64>,
    teacher_id: Option<i64>,
) -> String {
    let password = "TestPass#1".to_string();
    let hashed = hash_password(&password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password: hashed,
            role,
            headman_id,
            student_id,
            teacher_id,
        },
    )
    .await
    .expect("user creation should succeed");
    password
}

/// Sign in through the API and return the access token.
pub async fn signin(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/auth/signin", body, None).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("access_token must be a string")
        .to_string()
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    send_json(app, "POST", uri, body, token).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    send_json(app, "PATCH", uri, body, token).await
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}
