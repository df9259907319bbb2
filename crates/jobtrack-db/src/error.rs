//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A `UNIQUE` constraint rejected a write. Raised when a concurrent
    /// request slips past a service-level pre-check.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DbError::UniqueViolation(db.message().to_string())
            }
            _ => DbError::Sqlx(err),
        }
    }
}

impl DbError {
    /// True if the error came from a uniqueness constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation(_))
    }
}
