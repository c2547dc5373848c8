//! Partial-update builder.
//!
//! Every entity's PATCH path assembles its statement through [`PatchBuilder`]
//! instead of hand-building `UPDATE ... SET` fragments per repository.
//! Column and table names are `&'static str` literals supplied by repository
//! code; request-supplied data only ever reaches the statement through bind
//! parameters.

use sqlx::{Encode, PgPool, Postgres, QueryBuilder, Type};

use crate::error::DbError;

/// Accumulates `column = $n` assignments for one `UPDATE` statement.
///
/// Refuses to execute with zero assignments, so a patch can never degrade
/// into a keyed no-op or touch unintended columns.
pub struct PatchBuilder<'args> {
    builder: QueryBuilder<'args, Postgres>,
    fields: usize,
}

impl<'args> PatchBuilder<'args> {
    pub fn new(table: &'static str) -> Self {
        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(table);
        builder.push(" SET ");
        Self { builder, fields: 0 }
    }

    /// Add one assignment unconditionally.
    pub fn set<T>(&mut self, column: &'static str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.fields > 0 {
            self.builder.push(", ");
        }
        self.builder.push(column);
        self.builder.push(" = ");
        self.builder.push_bind(value);
        self.fields += 1;
        self
    }

    /// Add an assignment only when the field was supplied.
    pub fn set_if_some<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Nullable column: the outer `Option` is supplied-or-skipped, the inner
    /// one is the value written (`None` clears the column to NULL).
    pub fn set_nullable<T>(
        &mut self,
        column: &'static str,
        value: Option<Option<T>>,
    ) -> &mut Self
    where
        Option<T>: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Number of assignments accumulated so far.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// The SQL text assembled so far (no WHERE clause yet).
    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    /// Append the key predicate and run the statement, returning the number
    /// of affected rows. Fails with [`DbError::NoUpdates`] before touching
    /// the pool when no assignment was added.
    pub async fn execute<K>(
        mut self,
        key_column: &'static str,
        key: K,
        pool: &PgPool,
    ) -> Result<u64, DbError>
    where
        K: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.fields == 0 {
            return Err(DbError::NoUpdates);
        }
        self.builder.push(" WHERE ");
        self.builder.push(key_column);
        self.builder.push(" = ");
        self.builder.push_bind(key);
        let result = self.builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_clause_per_supplied_field() {
        let mut patch = PatchBuilder::new("students");
        patch.set_if_some("last_name", Some("Иванов".to_string()));
        patch.set_if_some::<String>("first_name", None);
        assert_eq!(patch.fields(), 1);
        assert_eq!(patch.sql(), "UPDATE students SET last_name = $1");
    }

    #[test]
    fn test_clauses_are_comma_separated_and_ordered() {
        let mut patch = PatchBuilder::new("teachers");
        patch.set("last_name", "Петров".to_string());
        patch.set("departament_id", 3_i64);
        assert_eq!(
            patch.sql(),
            "UPDATE teachers SET last_name = $1, departament_id = $2"
        );
    }

    #[test]
    fn test_nullable_distinguishes_skip_from_clear() {
        let mut patch = PatchBuilder::new("attendance");
        // Missing in the request: skipped entirely.
        patch.set_nullable::<bool>("presence", None);
        assert_eq!(patch.fields(), 0);
        // Explicit null: one clause binding NULL.
        patch.set_nullable::<bool>("presence", Some(None));
        assert_eq!(patch.fields(), 1);
        assert_eq!(patch.sql(), "UPDATE attendance SET presence = $1");
    }

    #[test]
    fn test_empty_patch_has_no_fields() {
        let patch = PatchBuilder::new("groups");
        assert_eq!(patch.fields(), 0);
        // `execute` would return DbError::NoUpdates without issuing anything;
        // the guard is on `fields`, checked before the pool is touched.
    }
}
