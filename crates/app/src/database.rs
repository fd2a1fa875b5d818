//! Database connection management

use sqlx::{
    Error, PgPool,
    error::{DatabaseError, ErrorKind},
    migrate::{MigrateError, Migrator},
};
use thiserror::Error;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, Error> {
    PgPool::connect(database_url).await
}

/// Apply any outstanding migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Storage failures shared by every repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write.
    #[error("record already exists")]
    AlreadyExists {
        /// Name of the violated constraint, when the database reported one.
        constraint: Option<String>,
    },

    #[error("record not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl RepositoryError {
    /// Whether this error is a unique violation of the named constraint.
    #[must_use]
    pub fn violates(&self, name: &str) -> bool {
        matches!(self, Self::AlreadyExists { constraint: Some(constraint) } if constraint == name)
    }
}

impl From<Error> for RepositoryError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists {
                constraint: error
                    .as_database_error()
                    .and_then(DatabaseError::constraint)
                    .map(str::to_owned),
            },
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = RepositoryError::from(Error::RowNotFound);

        assert!(matches!(error, RepositoryError::NotFound), "got {error:?}");
    }

    #[test]
    fn other_errors_are_kept_as_storage_errors() {
        let error = RepositoryError::from(Error::PoolTimedOut);

        assert!(matches!(error, RepositoryError::Sql(_)), "got {error:?}");
    }

    #[test]
    fn violates_matches_only_the_named_constraint() {
        let error = RepositoryError::AlreadyExists {
            constraint: Some("clients_request_uuid_key".to_string()),
        };

        assert!(error.violates("clients_request_uuid_key"));
        assert!(!error.violates("clients_company_email_key"));
        assert!(!RepositoryError::NotFound.violates("clients_request_uuid_key"));
    }
}
