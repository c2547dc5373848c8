//! Repository for the `education_types` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::education_type::{
    CreateEducationType, EducationType, PatchEducationType, PutEducationType,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "education_type_id, education_type_name";

pub struct EducationTypeRepo;

impl EducationTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEducationType,
    ) -> Result<EducationType, sqlx::Error> {
        let query = format!(
            "INSERT INTO education_types (education_type_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationType>(&query)
            .bind(&input.education_type_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutEducationType,
    ) -> Result<Option<EducationType>, sqlx::Error> {
        let query = format!(
            "UPDATE education_types SET education_type_name = $2
             WHERE education_type_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationType>(&query)
            .bind(input.education_type_id)
            .bind(&input.education_type_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchEducationType) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("education_types");
        patch.set_if_some("education_type_name", input.education_type_name);
        patch
            .execute("education_type_id", input.education_type_id, pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education_types WHERE education_type_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EducationType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education_types WHERE education_type_id = $1");
        sqlx::query_as::<_, EducationType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<EducationType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education_types ORDER BY education_type_id");
        sqlx::query_as::<_, EducationType>(&query)
            .fetch_all(pool)
            .await
    }
}
