//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::token::TokenError,
    database::RepositoryError,
    errors::{ClassifiedError, ErrorKind},
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Unknown identifier or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Correct password for a deactivated account. Reported to callers
    /// exactly like [`AuthServiceError::InvalidCredentials`].
    #[error("account is deactivated")]
    AccountInactive,

    #[error("token is malformed")]
    TokenMalformed,

    #[error("token has expired")]
    TokenExpired,

    #[error("token subject no longer exists")]
    ActorNotFound,

    #[error("token subject is deactivated")]
    ActorInactive,

    #[error("token processing error")]
    Token(#[source] TokenError),

    #[error("storage error")]
    Storage(#[from] RepositoryError),
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Malformed => Self::TokenMalformed,
            TokenError::Expired => Self::TokenExpired,
            TokenError::WeakSecret | TokenError::InvalidLifetime | TokenError::Signing(_) => {
                Self::Token(error)
            }
        }
    }
}

impl ClassifiedError for AuthServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::AccountInactive => ErrorKind::InvalidCredentials,
            Self::TokenMalformed
            | Self::TokenExpired
            | Self::ActorNotFound
            | Self::ActorInactive => ErrorKind::AuthenticationFailed,
            Self::Token(_) | Self::Storage(_) => ErrorKind::Internal,
        }
    }
}
