//! Repository for the `teachers` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::teacher::{CreateTeacher, PatchTeacher, PutTeacher, Teacher, TeacherInfo};
use crate::patch::PatchBuilder;

const COLUMNS: &str =
    "teacher_id, departament_id, last_name, first_name, middle_name, teacher_email";

const INFO_SELECT: &str = "SELECT t.teacher_id, t.departament_id, t.last_name, t.first_name, \
    t.middle_name, t.teacher_email, d.departament_name \
    FROM teachers t \
    LEFT JOIN departaments d ON d.departament_id = t.departament_id";

/// Provides CRUD operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let query = format!(
            "INSERT INTO teachers
                (departament_id, last_name, first_name, middle_name, teacher_email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(input.departament_id)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .bind(&input.teacher_email)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutTeacher) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "UPDATE teachers SET
                departament_id = $2,
                last_name = $3,
                first_name = $4,
                middle_name = $5,
                teacher_email = $6
             WHERE teacher_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(input.teacher_id)
            .bind(input.departament_id)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .bind(&input.teacher_email)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchTeacher) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("teachers");
        patch.set_if_some("departament_id", input.departament_id);
        patch.set_if_some("last_name", input.last_name);
        patch.set_if_some("first_name", input.first_name);
        patch.set_if_some("middle_name", input.middle_name);
        patch.set_if_some("teacher_email", input.teacher_email);
        patch.execute("teacher_id", input.teacher_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE teacher_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeacherInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE t.teacher_id = $1");
        sqlx::query_as::<_, TeacherInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<TeacherInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE t.teacher_email = $1");
        sqlx::query_as::<_, TeacherInfo>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TeacherInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY t.teacher_id");
        sqlx::query_as::<_, TeacherInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_departament(
        pool: &PgPool,
        departament_id: DbId,
    ) -> Result<Vec<TeacherInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE t.departament_id = $1 ORDER BY t.teacher_id");
        sqlx::query_as::<_, TeacherInfo>(&query)
            .bind(departament_id)
            .fetch_all(pool)
            .await
    }
}
