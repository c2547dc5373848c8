//! Repository for the `groups` table. Keyed by the natural group id string.

use sqlx::PgPool;

use crate::error::DbError;
use crate::models::group::{CreateGroup, Group, GroupInfo, PatchGroup, PutGroup};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "group_id, profile_id";

const INFO_SELECT: &str = "SELECT g.group_id, g.profile_id, p.profile_name \
    FROM groups g \
    LEFT JOIN profiles p ON p.profile_id = g.profile_id";

pub struct GroupRepo;

impl GroupRepo {
    pub async fn create(pool: &PgPool, input: &CreateGroup) -> Result<Group, sqlx::Error> {
        let query = format!(
            "INSERT INTO groups (group_id, profile_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(&input.group_id)
            .bind(input.profile_id)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutGroup) -> Result<Option<Group>, sqlx::Error> {
        let query = format!(
            "UPDATE groups SET profile_id = $2
             WHERE group_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(&input.group_id)
            .bind(input.profile_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchGroup) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("groups");
        patch.set_if_some("profile_id", input.profile_id);
        patch.execute("group_id", input.group_id, pool).await
    }

    pub async fn delete(pool: &PgPool, group_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM groups WHERE group_id = $1")
            .bind(group_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        group_id: &str,
    ) -> Result<Option<GroupInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE g.group_id = $1");
        sqlx::query_as::<_, GroupInfo>(&query)
            .bind(group_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<GroupInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY g.group_id");
        sqlx::query_as::<_, GroupInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: i64,
    ) -> Result<Vec<GroupInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE g.profile_id = $1 ORDER BY g.group_id");
        sqlx::query_as::<_, GroupInfo>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }
}
