//! Repository for the `universities` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::university::{CreateUniversity, PatchUniversity, PutUniversity, University};
use crate::patch::PatchBuilder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "university_id, university_name, head_last_name, head_first_name, \
                       head_middle_name, university_email";

/// Provides CRUD operations for universities.
pub struct UniversityRepo;

impl UniversityRepo {
    /// Insert a new university, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUniversity,
    ) -> Result<University, sqlx::Error> {
        let query = format!(
            "INSERT INTO universities
                (university_name, head_last_name, head_first_name, head_middle_name, university_email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, University>(&query)
            .bind(&input.university_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.university_email)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column. Returns `None` if the row does not exist.
    pub async fn put(
        pool: &PgPool,
        input: &PutUniversity,
    ) -> Result<Option<University>, sqlx::Error> {
        let query = format!(
            "UPDATE universities SET
                university_name = $2,
                head_last_name = $3,
                head_first_name = $4,
                head_middle_name = $5,
                university_email = $6
             WHERE university_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, University>(&query)
            .bind(input.university_id)
            .bind(&input.university_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.university_email)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields. Returns the number of affected rows.
    pub async fn patch(pool: &PgPool, input: PatchUniversity) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("universities");
        patch.set_if_some("university_name", input.university_name);
        patch.set_if_some("head_last_name", input.head_last_name);
        patch.set_if_some("head_first_name", input.head_first_name);
        patch.set_if_some("head_middle_name", input.head_middle_name);
        patch.set_if_some("university_email", input.university_email);
        patch
            .execute("university_id", input.university_id, pool)
            .await
    }

    /// Delete by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM universities WHERE university_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities WHERE university_id = $1");
        sqlx::query_as::<_, University>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities WHERE university_name = $1");
        sqlx::query_as::<_, University>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities ORDER BY university_id");
        sqlx::query_as::<_, University>(&query).fetch_all(pool).await
    }
}
