//! Route tree.
//!
//! `api_routes` builds the `/api` tree; every role group carries its own
//! router module mirroring the external contract:
//!
//! ```text
//! /auth/signin                 login (public)
//! /admins/...                  full entity CRUD (admin only)
//! /headmans/...                attendance recording, timetable, report
//! /students/...                timetable views
//! /teachers/...                attendance recording, timetable, roster
//! ```

pub mod admin;
pub mod auth;
pub mod headman;
pub mod health;
pub mod student;
pub mod teacher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admins", admin::router())
        .nest("/headmans", headman::router())
        .nest("/students", student::router())
        .nest("/teachers", teacher::router())
}
