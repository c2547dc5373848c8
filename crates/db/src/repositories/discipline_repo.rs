//! Repository for the `disciplines` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::discipline::{
    CreateDiscipline, Discipline, DisciplineInfo, PatchDiscipline, PutDiscipline,
};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "discipline_id, departament_id, discipline_name";

const INFO_SELECT: &str = "SELECT di.discipline_id, di.departament_id, di.discipline_name, \
    d.departament_name \
    FROM disciplines di \
    LEFT JOIN departaments d ON d.departament_id = di.departament_id";

pub struct DisciplineRepo;

impl DisciplineRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDiscipline,
    ) -> Result<Discipline, sqlx::Error> {
        let query = format!(
            "INSERT INTO disciplines (departament_id, discipline_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Discipline>(&query)
            .bind(input.departament_id)
            .bind(&input.discipline_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(
        pool: &PgPool,
        input: &PutDiscipline,
    ) -> Result<Option<Discipline>, sqlx::Error> {
        let query = format!(
            "UPDATE disciplines SET departament_id = $2, discipline_name = $3
             WHERE discipline_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Discipline>(&query)
            .bind(input.discipline_id)
            .bind(input.departament_id)
            .bind(&input.discipline_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchDiscipline) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("disciplines");
        patch.set_if_some("departament_id", input.departament_id);
        patch.set_if_some("discipline_name", input.discipline_name);
        patch.execute("discipline_id", input.discipline_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disciplines WHERE discipline_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DisciplineInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE di.discipline_id = $1");
        sqlx::query_as::<_, DisciplineInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<DisciplineInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE di.discipline_name = $1");
        sqlx::query_as::<_, DisciplineInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<DisciplineInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY di.discipline_id");
        sqlx::query_as::<_, DisciplineInfo>(&query)
            .fetch_all(pool)
            .await
    }
}
