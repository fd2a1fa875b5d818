//! Administrator endpoints

use salvo::prelude::{Depot, StatusError};

use tenantry_app::{
    auth::{AuthenticatedActor, GuardError, Policy, authorize},
    domain::administrators::records::AdministratorUuid,
};

use crate::{errors::into_status_error, extensions::*};

pub(crate) mod client_requests;
pub(crate) mod clients;
pub(crate) mod dashboard;
pub(crate) mod login;
pub(crate) mod management;
pub(crate) mod profile;

/// Authorize the acting administrator against `policy` and return its id.
pub(crate) fn acting_administrator(
    depot: &Depot,
    policy: &Policy<'_>,
) -> Result<AdministratorUuid, StatusError> {
    let actor = depot.actor_or_401()?;

    authorize(actor, policy).map_err(into_status_error)?;

    match actor {
        AuthenticatedActor::Administrator(administrator) => Ok(administrator.uuid()),
        AuthenticatedActor::Client(_) | AuthenticatedActor::ClientUser(_) => {
            Err(into_status_error(GuardError::WrongKind(actor.kind())))
        }
    }
}
