//! Role-based access control extractors.
//!
//! One wrapper per role; the check is exact equality on the [`Role`] enum,
//! with no hierarchy between roles. A mismatch rejects with 403 before any
//! handler logic runs.

use attendance_core::error::CoreError;
use attendance_core::roles::Role;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

fn require_role(user: AuthUser, role: Role) -> Result<AuthUser, AppError> {
    if user.role != role {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Role '{role}' required"
        ))));
    }
    Ok(user)
}

/// Requires the admin role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user.role is guaranteed to be Role::Admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAdmin(require_role(user, Role::Admin)?))
    }
}

/// Requires the headman role.
pub struct RequireHeadman(pub AuthUser);

impl FromRequestParts<AppState> for RequireHeadman {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireHeadman(require_role(user, Role::Headman)?))
    }
}

/// Requires the student role.
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireStudent(require_role(user, Role::Student)?))
    }
}

/// Requires the teacher role.
pub struct RequireTeacher(pub AuthUser);

impl FromRequestParts<AppState> for RequireTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireTeacher(require_role(user, Role::Teacher)?))
    }
}
