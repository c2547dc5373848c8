//! Domain error taxonomy shared across crates.

/// Which unique constraint an already-exists conflict refers to, so the API
/// layer can report a field-specific message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    Username,
    Headman,
    Student,
    Teacher,
}

impl Conflict {
    pub fn as_str(self) -> &'static str {
        match self {
            Conflict::Username => "username",
            Conflict::Headman => "headman",
            Conflict::Student => "student",
            Conflict::Teacher => "teacher",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Already exists: {}", .0.as_str())]
    AlreadyExists(Conflict),

    #[error("No fields to update: at least one is required")]
    NoUpdates,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the common keyed-lookup miss.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
