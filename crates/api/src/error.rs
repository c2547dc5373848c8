use attendance_core::error::{Conflict, CoreError};
use attendance_db::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and the storage error types.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, not-found, authorization).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A repository error (empty patch or wrapped driver error).
    #[error("Repository error: {0}")]
    Repo(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Repo(DbError::NoUpdates) => classify_core_error(&CoreError::NoUpdates),
            AppError::Repo(DbError::Sqlx(err)) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, key } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with key {key} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::AlreadyExists(kind) => conflict_response(*kind),
        CoreError::NoUpdates => (
            StatusCode::BAD_REQUEST,
            "NO_UPDATES",
            "No fields to update: at least one is required".to_string(),
        ),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (code 23505) are resolved by constraint identity:
///   the `uq_users_*` constraints map to field-specific conflict kinds,
///   any other `uq_`-prefixed constraint to a generic 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if let Some(kind) = conflict_kind(constraint) {
                    return conflict_response(kind);
                }
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Resolve a user-table constraint name to its conflict kind.
fn conflict_kind(constraint: &str) -> Option<Conflict> {
    match constraint {
        "uq_users_username" => Some(Conflict::Username),
        "uq_users_headman_id" => Some(Conflict::Headman),
        "uq_users_student_id" => Some(Conflict::Student),
        "uq_users_teacher_id" => Some(Conflict::Teacher),
        _ => None,
    }
}

fn conflict_response(kind: Conflict) -> (StatusCode, &'static str, String) {
    let message = match kind {
        Conflict::Username => "A user with this username already exists",
        Conflict::Headman => "This headman is already registered",
        Conflict::Student => "This student is already registered",
        Conflict::Teacher => "This teacher is already registered",
    };
    let code = match kind {
        Conflict::Username => "ALREADY_EXISTS_USERNAME",
        Conflict::Headman => "ALREADY_EXISTS_HEADMAN",
        Conflict::Student => "ALREADY_EXISTS_STUDENT",
        Conflict::Teacher => "ALREADY_EXISTS_TEACHER",
    };
    (StatusCode::CONFLICT, code, message.to_string())
}
