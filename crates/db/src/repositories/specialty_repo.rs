//! Repository for the `specialties` table. Keyed by the natural code.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::specialty::{
    CreateSpecialty, PatchSpecialty, PutSpecialty, Specialty, SpecialtyInfo,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "specialty_code, specialty_name, departament_id, education_level_id";

const INFO_SELECT: &str = "SELECT s.specialty_code, s.specialty_name, s.departament_id, \
    s.education_level_id, d.departament_name, e.education_level_name \
    FROM specialties s \
    LEFT JOIN departaments d ON d.departament_id = s.departament_id \
    LEFT JOIN education_levels e ON e.education_level_id = s.education_level_id";

pub struct SpecialtyRepo;

impl SpecialtyRepo {
    pub async fn create(pool: &PgPool, input: &CreateSpecialty) -> Result<Specialty, sqlx::Error> {
        let query = format!(
            "INSERT INTO specialties
                (specialty_code, specialty_name, departament_id, education_level_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Specialty>(&query)
            .bind(&input.specialty_code)
            .bind(&input.specialty_name)
            .bind(input.departament_id)
            .bind(input.education_level_id)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutSpecialty,
    ) -> Result<Option<Specialty>, sqlx::Error> {
        let query = format!(
            "UPDATE specialties SET
                specialty_name = $2,
                departament_id = $3,
                education_level_id = $4
             WHERE specialty_code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Specialty>(&query)
            .bind(&input.specialty_code)
            .bind(&input.specialty_name)
            .bind(input.departament_id)
            .bind(input.education_level_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchSpecialty) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("specialties");
        patch.set_if_some("specialty_name", input.specialty_name);
        patch.set_if_some("departament_id", input.departament_id);
        patch.set_if_some("education_level_id", input.education_level_id);
        patch
            .execute("specialty_code", input.specialty_code, pool)
            .await
    }

    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM specialties WHERE specialty_code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<SpecialtyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.specialty_code = $1");
        sqlx::query_as::<_, SpecialtyInfo>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<SpecialtyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.specialty_name = $1");
        sqlx::query_as::<_, SpecialtyInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<SpecialtyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY s.specialty_code");
        sqlx::query_as::<_, SpecialtyInfo>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_departament(
        pool: &PgPool,
        departament_id: DbId,
    ) -> Result<Vec<SpecialtyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE s.departament_id = $1 ORDER BY s.specialty_code");
        sqlx::query_as::<_, SpecialtyInfo>(&query)
            .bind(departament_id)
            .fetch_all(pool)
            .await
    }
}
