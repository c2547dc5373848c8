//! Handlers for the `/auth` resource.

use attendance_core::error::CoreError;
use attendance_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/signin`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub access_token: String,
}

/// POST /api/auth/signin
///
/// Authenticate with username + password. The same 401 is returned for an
/// unknown username and a wrong password.
pub async fn signin(
    State(state): State<AppState>,
    Json(input): Json<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = generate_access_token(user.user_id, user.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok(Json(SignInResponse { access_token }))
}
