//! Repository for the `profiles` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::profile::{CreateProfile, PatchProfile, Profile, ProfileInfo, PutProfile};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "profile_id, specialty_code, education_type_id, profile_name";

const INFO_SELECT: &str = "SELECT p.profile_id, p.specialty_code, p.education_type_id, \
    p.profile_name, et.education_type_name \
    FROM profiles p \
    LEFT JOIN education_types et ON et.education_type_id = p.education_type_id";

pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (specialty_code, education_type_id, profile_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.specialty_code)
            .bind(input.education_type_id)
            .bind(&input.profile_name)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutProfile) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                specialty_code = $2,
                education_type_id = $3,
                profile_name = $4
             WHERE profile_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.profile_id)
            .bind(&input.specialty_code)
            .bind(input.education_type_id)
            .bind(&input.profile_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchProfile) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("profiles");
        patch.set_if_some("specialty_code", input.specialty_code);
        patch.set_if_some("education_type_id", input.education_type_id);
        patch.set_if_some("profile_name", input.profile_name);
        patch.execute("profile_id", input.profile_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE profile_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProfileInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE p.profile_id = $1");
        sqlx::query_as::<_, ProfileInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ProfileInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE p.profile_name = $1");
        sqlx::query_as::<_, ProfileInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProfileInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY p.profile_id");
        sqlx::query_as::<_, ProfileInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_specialty(
        pool: &PgPool,
        specialty_code: &str,
    ) -> Result<Vec<ProfileInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE p.specialty_code = $1 ORDER BY p.profile_id");
        sqlx::query_as::<_, ProfileInfo>(&query)
            .bind(specialty_code)
            .fetch_all(pool)
            .await
    }
}
