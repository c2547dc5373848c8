//! Domain vocabulary shared by the `db` and `api` crates: id/date aliases,
//! the closed role and timetable enumerations, the error taxonomy, and the
//! compiled input-validation rule set.

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
pub mod week;
