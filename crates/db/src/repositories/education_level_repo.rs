//! Repository for the `education_levels` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::education_level::{
    CreateEducationLevel, EducationLevel, PatchEducationLevel, PutEducationLevel,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "education_level_id, education_level_name";

pub struct EducationLevelRepo;

impl EducationLevelRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEducationLevel,
    ) -> Result<EducationLevel, sqlx::Error> {
        let query = format!(
            "INSERT INTO education_levels (education_level_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationLevel>(&query)
            .bind(&input.education_level_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutEducationLevel,
    ) -> Result<Option<EducationLevel>, sqlx::Error> {
        let query = format!(
            "UPDATE education_levels SET education_level_name = $2
             WHERE education_level_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationLevel>(&query)
            .bind(input.education_level_id)
            .bind(&input.education_level_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchEducationLevel) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("education_levels");
        patch.set_if_some("education_level_name", input.education_level_name);
        patch
            .execute("education_level_id", input.education_level_id, pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education_levels WHERE education_level_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EducationLevel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education_levels WHERE education_level_id = $1");
        sqlx::query_as::<_, EducationLevel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<EducationLevel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education_levels ORDER BY education_level_id");
        sqlx::query_as::<_, EducationLevel>(&query)
            .fetch_all(pool)
            .await
    }
}
