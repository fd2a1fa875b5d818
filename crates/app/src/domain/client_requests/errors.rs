//! Onboarding errors.

use thiserror::Error;

use crate::{
    auth::password::PasswordError,
    database::RepositoryError,
    domain::client_requests::records::ClientRequestStatus,
    errors::{ClassifiedError, ErrorKind},
    validation::FieldErrors,
};

#[derive(Debug, Error)]
pub enum ClientRequestsServiceError {
    #[error("invalid client request: {0}")]
    Validation(FieldErrors),

    #[error("a pending request already exists for this company email")]
    DuplicateRequest,

    #[error("client request not found")]
    NotFound,

    #[error("cannot {action} a client request that is {status}")]
    InvalidStateTransition {
        status: ClientRequestStatus,
        action: &'static str,
    },

    /// Unknown request or wrong staged password at signup.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("client already created for this request")]
    AlreadyMaterialized,

    #[error("a client with this company email already exists")]
    ClientAlreadyExists,

    #[error("storage error")]
    Storage(#[source] RepositoryError),

    #[error("password hashing failed")]
    Password(#[from] PasswordError),
}

impl From<RepositoryError> for ClientRequestsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            ref duplicate if duplicate.violates(PENDING_EMAIL_CONSTRAINT) => Self::DuplicateRequest,
            ref duplicate if duplicate.violates(CLIENT_REQUEST_CONSTRAINT) => {
                Self::AlreadyMaterialized
            }
            ref duplicate if duplicate.violates(CLIENT_EMAIL_CONSTRAINT) => {
                Self::ClientAlreadyExists
            }
            RepositoryError::AlreadyExists { .. }
            | RepositoryError::InvalidReference
            | RepositoryError::MissingRequiredData
            | RepositoryError::InvalidData
            | RepositoryError::Sql(_) => Self::Storage(error),
        }
    }
}

impl From<FieldErrors> for ClientRequestsServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ClassifiedError for ClientRequestsServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateRequest | Self::AlreadyMaterialized | Self::ClientAlreadyExists => {
                ErrorKind::Conflict
            }
            Self::NotFound => ErrorKind::NotFound,
            Self::InvalidStateTransition { .. } => ErrorKind::InvalidStateTransition,
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::Storage(_) | Self::Password(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateRequest => "duplicate_request",
            Self::AlreadyMaterialized => "already_materialized",
            _ => self.kind().as_str(),
        }
    }

    fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

const PENDING_EMAIL_CONSTRAINT: &str = "client_requests_pending_company_email_key";
const CLIENT_REQUEST_CONSTRAINT: &str = "clients_request_uuid_key";
const CLIENT_EMAIL_CONSTRAINT: &str = "clients_company_email_key";

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(constraint: &str) -> RepositoryError {
        RepositoryError::AlreadyExists {
            constraint: Some(constraint.to_string()),
        }
    }

    #[test]
    fn unique_violations_map_by_constraint() {
        let duplicate = ClientRequestsServiceError::from(unique(PENDING_EMAIL_CONSTRAINT));
        let materialized = ClientRequestsServiceError::from(unique(CLIENT_REQUEST_CONSTRAINT));
        let existing = ClientRequestsServiceError::from(unique(CLIENT_EMAIL_CONSTRAINT));

        assert_eq!(duplicate.code(), "duplicate_request");
        assert_eq!(materialized.code(), "already_materialized");
        assert_eq!(existing.code(), "conflict");
        assert_eq!(existing.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn unexpected_unique_violation_is_internal() {
        let error = ClientRequestsServiceError::from(unique("something_else_key"));

        assert_eq!(error.kind(), ErrorKind::Internal);
    }
}
