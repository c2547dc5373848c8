//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Create*` DTO for inserts and a `Put*` DTO for full replaces
//! - A `Patch*` DTO whose optional fields drive the partial-update builder
//! - Where read paths enrich with a parent name, an `*Info` row struct

pub mod attendance;
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
pub mod user;

use serde::{Deserialize, Deserializer};

/// For nullable patch fields: distinguishes a field that is absent from the
/// request (outer `None`, skip) from an explicit JSON `null` (inner `None`,
/// clear the column). Use together with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
