//! Repository for the `users` table.
//!
//! Read paths return [`UserInfo`], which joins the linked person's identity:
//! students carry their own name and group, headmen reach the name and group
//! through their student row, teachers carry the teacher name. Uniqueness of
//! username and of each role link is enforced by the `uq_users_*` constraints;
//! violations surface as `sqlx::Error::Database` with the constraint name and
//! are classified by the API layer.

use attendance_core::roles::Role;
use attendance_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::user::{CreateUser, PatchUser, PutUser, User, UserInfo};
use crate::patch::PatchBuilder;

const COLUMNS: &str =
    "user_id, username, password, user_role, headman_id, student_id, teacher_id";

const INFO_SELECT: &str = "SELECT u.user_id, u.username, u.password, u.user_role, \
    u.headman_id, u.student_id, u.teacher_id, \
    s.last_name AS student_last_name, \
    s.first_name AS student_first_name, \
    s.middle_name AS student_middle_name, \
    s.group_id AS group_id, \
    t.last_name AS teacher_last_name, \
    t.first_name AS teacher_first_name, \
    t.middle_name AS teacher_middle_name \
    FROM users u \
    LEFT JOIN headmans h ON h.headman_id = u.headman_id \
    LEFT JOIN students s ON s.student_id = u.student_id OR s.student_id = h.student_id \
    LEFT JOIN teachers t ON t.teacher_id = u.teacher_id";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row. `input.password` must
    /// already be hashed.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password, user_role, headman_id, student_id, teacher_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password)
            .bind(input.role)
            .bind(input.headman_id)
            .bind(input.student_id)
            .bind(input.teacher_id)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutUser) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = $2,
                password = $3,
                user_role = $4,
                headman_id = $5,
                student_id = $6,
                teacher_id = $7
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.user_id)
            .bind(&input.username)
            .bind(&input.password)
            .bind(input.role)
            .bind(input.headman_id)
            .bind(input.student_id)
            .bind(input.teacher_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, user_id: Uuid, input: PatchUser) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("users");
        patch.set_if_some("username", input.username);
        patch.set_if_some("password", input.password);
        patch.set_if_some("user_role", input.role);
        patch.set_nullable("headman_id", input.headman_id);
        patch.set_nullable("student_id", input.student_id);
        patch.set_nullable("teacher_id", input.teacher_id);
        patch.execute("user_id", user_id, pool).await
    }

    pub async fn delete(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.user_id = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.username = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_student_id(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.student_id = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_headman_id(
        pool: &PgPool,
        headman_id: DbId,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.headman_id = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(headman_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_teacher_id(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.teacher_id = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY u.username");
        sqlx::query_as::<_, UserInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_role(pool: &PgPool, role: Role) -> Result<Vec<UserInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE u.user_role = $1 ORDER BY u.username");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }
}
