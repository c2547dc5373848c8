//! Repository for the `faculties` table.

use attendance_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::faculty::{CreateFaculty, Faculty, FacultyInfo, PatchFaculty, PutFaculty};
use crate::patch::PatchBuilder;

const COLUMNS: &str = "faculty_id, university_id, faculty_name, head_last_name, \
                       head_first_name, head_middle_name, faculty_email";

/// Read-side select enriched with the university name.
const INFO_SELECT: &str = "SELECT f.faculty_id, f.university_id, f.faculty_name, \
    f.head_last_name, f.head_first_name, f.head_middle_name, f.faculty_email, \
    u.university_name \
    FROM faculties f \
    LEFT JOIN universities u ON u.university_id = f.university_id";

/// Provides CRUD operations for faculties.
pub struct FacultyRepo;

impl FacultyRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaculty) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculties
                (university_id, faculty_name, head_last_name, head_first_name, head_middle_name, faculty_email)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(input.university_id)
            .bind(&input.faculty_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.faculty_email)
            .fetch_one(pool)
            .await
    }

    pub async fn put(pool: &PgPool, input: &PutFaculty) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "UPDATE faculties SET
                university_id = $2,
                faculty_name = $3,
                head_last_name = $4,
                head_first_name = $5,
                head_middle_name = $6,
                faculty_email = $7
             WHERE faculty_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(input.faculty_id)
            .bind(input.university_id)
            .bind(&input.faculty_name)
            .bind(&input.head_last_name)
            .bind(&input.head_first_name)
            .bind(&input.head_middle_name)
            .bind(&input.faculty_email)
            .fetch_optional(pool)
            .await
    }

    pub async fn patch(pool: &PgPool, input: PatchFaculty) -> Result<u64, DbError> {
        let mut patch = PatchBuilder::new("faculties");
        patch.set_if_some("university_id", input.university_id);
        patch.set_if_some("faculty_name", input.faculty_name);
        patch.set_if_some("head_last_name", input.head_last_name);
        patch.set_if_some("head_first_name", input.head_first_name);
        patch.set_if_some("head_middle_name", input.head_middle_name);
        patch.set_if_some("faculty_email", input.faculty_email);
        patch.execute("faculty_id", input.faculty_id, pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faculties WHERE faculty_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FacultyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE f.faculty_id = $1");
        sqlx::query_as::<_, FacultyInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<FacultyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE f.faculty_name = $1");
        sqlx::query_as::<_, FacultyInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<FacultyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} ORDER BY f.faculty_id");
        sqlx::query_as::<_, FacultyInfo>(&query).fetch_all(pool).await
    }

    pub async fn list_by_university(
        pool: &PgPool,
        university_id: DbId,
    ) -> Result<Vec<FacultyInfo>, sqlx::Error> {
        let query = format!("{INFO_SELECT} WHERE f.university_id = $1 ORDER BY f.faculty_id");
        sqlx::query_as::<_, FacultyInfo>(&query)
            .bind(university_id)
            .fetch_all(pool)
            .await
    }
}
