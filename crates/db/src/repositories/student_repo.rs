//! Repository for the `students` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::student::{CreateStudent, PatchStudent, PutStudent, Student};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "student_id, group_id, last_name, first_name, middle_name";

pub struct StudentRepo;

impl StudentRepo {
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (group_id, last_name, first_name, middle_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.group_id)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutStudent) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                group_id = $2,
                last_name = $3,
                first_name = $4,
                middle_name = $5
             WHERE student_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.student_id)
            .bind(&input.group_id)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchStudent) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("students");
        patch.set_if_some("group_id", input.group_id);
        patch.set_if_some("last_name", input.last_name);
        patch.set_if_some("first_name", input.first_name);
        patch.set_if_some("middle_name", input.middle_name);
        patch.execute("student_id", input.student_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE student_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY student_id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Group roster, ordered by last name.
    pub async fn list_by_group(pool: &PgPool, group_id: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM students WHERE group_id = $1 ORDER BY last_name");
        sqlx::query_as::<_, Student>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }
}
