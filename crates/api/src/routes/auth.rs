//! Routes mounted at `/auth`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /signin    authenticate, returns an access token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/signin", post(auth::signin))
}
