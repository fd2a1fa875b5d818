//! Clients service errors.

use thiserror::Error;

use crate::{
    database::RepositoryError,
    errors::{ClassifiedError, ErrorKind},
    validation::FieldErrors,
};

#[derive(Debug, Error)]
pub enum ClientsServiceError {
    #[error("invalid client data: {0}")]
    Validation(FieldErrors),

    #[error("client not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for ClientsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            _ => Self::Storage(error),
        }
    }
}

impl From<FieldErrors> for ClientsServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ClassifiedError for ClientsServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
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
