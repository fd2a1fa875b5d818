//! Mapping of service errors onto HTTP responses.

use salvo::http::StatusError;
use tracing::error;

use tenantry_app::errors::{ClassifiedError, ErrorKind};

/// Translate any classified service error into a status error.
///
/// The brief carries the machine-readable code; validation failures list the
/// rejected fields in the detail. Internal errors are logged with their source
/// and answered with a bare 500.
pub(crate) fn into_status_error<E: ClassifiedError>(error: E) -> StatusError {
    let status = match error.kind() {
        ErrorKind::Validation => StatusError::bad_request(),
        ErrorKind::InvalidCredentials | ErrorKind::AuthenticationFailed => {
            StatusError::unauthorized()
        }
        ErrorKind::AuthorizationDenied => StatusError::forbidden(),
        ErrorKind::NotFound => StatusError::not_found(),
        ErrorKind::InvalidStateTransition | ErrorKind::Conflict => StatusError::conflict(),
        ErrorKind::Internal => {
            match error.source() {
                Some(source) => error!("{error}: {source}"),
                None => error!("{error}"),
            }

            return StatusError::internal_server_error();
        }
    };

    let status = status.brief(error.code());

    match error.fields() {
        Some(fields) => status.detail(fields.to_string()),
        None => status,
    }
}
