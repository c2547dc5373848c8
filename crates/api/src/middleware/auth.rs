//! JWT-based authentication extractor.

use attendance_core::error::CoreError;
use attendance_core::roles::Role;
use attendance_core::types::DbId;
use attendance_db::repositories::UserRepo;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// The token only carries the subject; the role and the group/teacher
/// affiliation are re-fetched from storage on every request, so downstream
/// handlers can use them without a second lookup and a stale token can never
/// smuggle in an outdated role.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: Uuid,
    /// The authoritative role, from the user row.
    pub role: Role,
    /// Group the account belongs to, for students and headmen.
    pub group_id: Option<String>,
    /// Teacher row linked to the account, for teachers.
    pub teacher_id: Option<DbId>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Unknown token subject".into()))
            })?;

        Ok(AuthUser {
            user_id: user.user_id,
            role: user.role,
            group_id: user.group_id,
            teacher_id: user.teacher_id,
        })
    }
}

impl AuthUser {
    /// The group this account acts for. Errors for accounts with no group
    /// binding (admins, teachers, or dangling links).
    pub fn require_group(&self) -> Result<&str, AppError> {
        self.group_id.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "No group is bound to this account".into(),
            ))
        })
    }

    /// The teacher row this account acts for.
    pub fn require_teacher(&self) -> Result<DbId, AppError> {
        self.teacher_id.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "No teacher is bound to this account".into(),
            ))
        })
    }
}
