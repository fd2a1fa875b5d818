//! Administrators service errors.

use thiserror::Error;

use crate::{
    auth::password::PasswordError,
    database::RepositoryError,
    errors::{ClassifiedError, ErrorKind},
    validation::FieldErrors,
};

#[derive(Debug, Error)]
pub enum AdministratorsServiceError {
    #[error("invalid administrator data: {0}")]
    Validation(FieldErrors),

    #[error("administrator already exists")]
    AlreadyExists,

    #[error("administrator not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] RepositoryError),

    #[error("password hashing failed")]
    Password(#[from] PasswordError),
}

impl From<RepositoryError> for AdministratorsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::AlreadyExists { .. } => Self::AlreadyExists,
            RepositoryError::InvalidReference => {
                Self::Validation(FieldErrors::single("role_uuid", "unknown"))
            }
            RepositoryError::MissingRequiredData
            | RepositoryError::InvalidData
            | RepositoryError::Sql(_) => Self::Storage(error),
        }
    }
}

impl From<FieldErrors> for AdministratorsServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ClassifiedError for AdministratorsServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::Storage(_) | Self::Password(_) => ErrorKind::Internal,
        }
    }

    fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
