/// Error type for repository operations that can fail for reasons other than
/// the driver itself (currently only the empty-patch case).
///
/// Plain CRUD methods return `sqlx::Error` directly; only the patch paths
/// need this wrapper.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A partial update was requested with no recognized fields. No statement
    /// was issued.
    #[error("no fields to update")]
    NoUpdates,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
