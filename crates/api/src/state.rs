use std::sync::Arc;

use attendance_core::validation::ValidationRules;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; inner data is behind `Arc` or is
/// already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: attendance_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS).
    pub config: Arc<ServerConfig>,
    /// Compiled input-validation rules, built once at startup.
    pub rules: Arc<ValidationRules>,
}
