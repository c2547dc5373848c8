//! Repository for the `classrooms` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::classroom::{Classroom, CreateClassroom, PatchClassroom, PutClassroom};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "classroom_id, classroom_name";

pub struct ClassroomRepo;

impl ClassroomRepo {
    pub async fn create(pool: &PgPool, input: &CreateClassroom) -> Result<Classroom, sqlx::Error> {
        let query = format!(
            "INSERT INTO classrooms (classroom_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Classroom>(&query)
            .bind(&input.classroom_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutClassroom,
    ) -> Result<Option<Classroom>, sqlx::Error> {
        let query = format!(
            "UPDATE classrooms SET classroom_name = $2
             WHERE classroom_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Classroom>(&query)
            .bind(input.classroom_id)
            .bind(&input.classroom_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchClassroom) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("classrooms");
        patch.set_if_some("classroom_name", input.classroom_name);
        patch.execute("classroom_id", input.classroom_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classrooms WHERE classroom_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Classroom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classrooms WHERE classroom_id = $1");
        sqlx::query_as::<_, Classroom>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Classroom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classrooms ORDER BY classroom_id");
        sqlx::query_as::<_, Classroom>(&query).fetch_all(pool).await
    }
}
