//! Repository for the `departaments` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::departament::{
    CreateDepartament, Departament, DepartamentInfo, PatchDepartament, PutDepartament,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "departament_id, faculty_id, departament_name, head_last_name, \
                       head_first_name, head_middle_name, departament_email";

const INFO_SELECT: &str = "SELECT d.departament_id, d.faculty_id, d.departament_name, \
    d.head_last_name, d.head_first_name, d.head_middle_name, d.departament_email, \
    f.faculty_name \
    FROM departaments d \
    LEFT JOIN faculties f ON f.faculty_id = d.faculty_id";

/// Provides CRUD operations for departaments.
pub struct DepartamentRepo;

impl DepartamentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartament,
    ) -> Result<Departament, sqlx::Error> {
        let query = format!(
            "INSERT INTO departaments
                (faculty_id, departament_name, head_last_name, head_first_name, head_middle_name, departament_email)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Departament>(&query)
            .bind(input.faculty_id)
            .bind(&input.departament_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.departament_email)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutDepartament,
    ) -> Result<Option<Departament>, sqlx::Error> {
        let query = format!(
            "UPDATE departaments SET
                faculty_id = $2,
                departament_name = $3,
                head_last_name = $4,
                head_first_name = $5,
                head_middle_name = $6,
                departament_email = $7
             WHERE departament_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Departament>(&query)
            .bind(input.departament_id)
            .bind(input.faculty_id)
            .bind(&input.departament_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.departament_email)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchDepartament) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("departaments");
        patch.set_if_some("faculty_id", input.faculty_id);
        patch.set_if_some("departament_name", input.departament_name);
        patch.set_if_some("head_last_name", input.head_last_name);
        patch.set_if_some("head_first_name", input.head_first_name);
        patch.set_if_some("head_middle_name", input.head_middle_name);
        patch.set_if_some("departament_email", input.departament_email);
        patch
            .execute("departament_id", input.departament_id, pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departaments WHERE departament_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DepartamentInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE d.departament_id = $1");
        sqlx::query_as::<_, DepartamentInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<DepartamentInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE d.departament_name = $1");
        sqlx::query_as::<_, DepartamentInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<DepartamentInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY d.departament_id");
        sqlx::query_as::<_, DepartamentInfo>(&query)
            .fetch_all(pool)
            .await
    }
}
