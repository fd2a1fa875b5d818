//! Client roles service errors.

use thiserror::Error;

use crate::{
    database::RepositoryError,
    errors::{ClassifiedError, ErrorKind},
    validation::FieldErrors,
};

#[derive(Debug, Error)]
pub enum ClientRolesServiceError {
    #[error("invalid client role: {0}")]
    Validation(FieldErrors),

    #[error("client role already exists")]
    AlreadyExists,

    #[error("client role not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for ClientRolesServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::AlreadyExists { .. } => Self::AlreadyExists,
            _ => Self::Storage(error),
        }
    }
}

impl From<FieldErrors> for ClientRolesServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ClassifiedError for ClientRolesServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }

    fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
