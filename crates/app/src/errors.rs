//! Error classification.
//!
//! Every service error maps onto one [`ErrorKind`]; the HTTP layer only ever
//! looks at the kind, the machine-readable code and any field-level detail.

use std::error::Error;

use crate::validation::FieldErrors;

/// Coarse error categories surfaced to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidCredentials,
    AuthenticationFailed,
    AuthorizationDenied,
    InvalidStateTransition,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::InvalidCredentials => "invalid_credentials",
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationDenied => "authorization_denied",
            Self::InvalidStateTransition => "invalid_state_transition",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }
}

/// Implemented by every error a service can return.
pub trait ClassifiedError: Error {
    fn kind(&self) -> ErrorKind;

    /// Machine-readable code; more specific than the kind for some conflicts.
    fn code(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Offending fields for validation failures.
    fn fields(&self) -> Option<&FieldErrors> {
        None
    }
}
