use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a unique-constraint violation to `Conflict`, anything else to `Sqlx`.
    pub fn from_write(err: SqlxError, conflict: impl FnOnce() -> String) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if is_unique_violation {
            RepositoryError::Conflict(conflict())
        } else {
            RepositoryError::Sqlx(err)
        }
    }
}
