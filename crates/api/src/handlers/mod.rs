//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers bind JSON, run validation-rule checks, delegate to the matching
//! repository in `attendance_db`, and map errors via [`crate::error::AppError`].

pub mod attendance;
pub mod auth;
pub mod classroom;
pub mod departament;
pub mod discipline;
pub mod discipline_type;
pub mod education_level;
pub mod education_type;
pub mod faculty;
pub mod group;
pub mod headman;
pub mod profile;
pub mod report;
pub mod schedule;
pub mod specialty;
pub mod student;
pub mod teacher;
pub mod university;
pub mod users;
