//! Repository for the `discipline_types` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::discipline_type::{
    CreateDisciplineType, DisciplineType, PatchDisciplineType, PutDisciplineType,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "discipline_type_id, discipline_type_name";

pub struct DisciplineTypeRepo;

impl DisciplineTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDisciplineType,
    ) -> Result<DisciplineType, sqlx::Error> {
        let query = format!(
            "INSERT INTO discipline_types (discipline_type_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisciplineType>(&query)
            .bind(&input.discipline_type_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutDisciplineType,
    ) -> Result<Option<DisciplineType>, sqlx::Error> {
        let query = format!(
            "UPDATE discipline_types SET discipline_type_name = $2
             WHERE discipline_type_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisciplineType>(&query)
            .bind(input.discipline_type_id)
            .bind(&input.discipline_type_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchDisciplineType) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("discipline_types");
        patch.set_if_some("discipline_type_name", input.discipline_type_name);
        patch
            .execute("discipline_type_id", input.discipline_type_id, pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM discipline_types WHERE discipline_type_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DisciplineType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM discipline_types WHERE discipline_type_id = $1");
        sqlx::query_as::<_, DisciplineType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<DisciplineType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM discipline_types ORDER BY discipline_type_id");
        sqlx::query_as::<_, DisciplineType>(&query)
            .fetch_all(pool)
            .await
    }
}
