//! Repository for the `headmans` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::headman::{CreateHeadman, Headman, HeadmanInfo, PatchHeadman, PutHeadman};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "headman_id, student_id, group_id";

const INFO_SELECT: &str = "SELECT h.headman_id, h.student_id, h.group_id, \
    s.last_name, s.first_name, s.middle_name \
    FROM headmans h \
    LEFT JOIN students s ON s.student_id = h.student_id";

pub struct HeadmanRepo;

impl HeadmanRepo {
    pub async fn create(pool: &PgPool, input: &CreateHeadman) -> Result<Headman, sqlx::Error> {
        let query = format!(
            "INSERT INTO headmans (student_id, group_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Headman>(&query)
            .bind(input.student_id)
            .bind(&input.group_id)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutHeadman) -> Result<Option<Headman>, sqlx::Error> {
        let query = format!(
            "UPDATE headmans SET student_id = $2, group_id = $3
             WHERE headman_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Headman>(&query)
            .bind(input.headman_id)
            .bind(input.student_id)
            .bind(&input.group_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchHeadman) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("headmans");
        patch.set_if_some("student_id", input.student_id);
        patch.set_if_some("group_id", input.group_id);
        patch.execute("headman_id", input.headman_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM headmans WHERE headman_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeadmanInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE h.headman_id = $1");
        sqlx::query_as::<_, HeadmanInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_student_id(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<HeadmanInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE h.student_id = $1");
        sqlx::query_as::<_, HeadmanInfo>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<HeadmanInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY h.headman_id");
        sqlx::query_as::<_, HeadmanInfo>(&query).fetch_all(pool).await
    }
}
