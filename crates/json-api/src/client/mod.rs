//! Client (tenant) endpoints

use salvo::prelude::{Depot, StatusError};

use tenantry_app::{
    auth::{Policy, authorize_tenant},
    domain::clients::records::ClientUuid,
};

use crate::{errors::into_status_error, extensions::*};

pub(crate) mod login;
pub(crate) mod profile;
pub(crate) mod request;
pub(crate) mod roles;
pub(crate) mod signup;
pub(crate) mod users;

/// Authorize the actor against `policy` and return the tenant it acts for.
pub(crate) fn acting_tenant(depot: &Depot, policy: &Policy<'_>) -> Result<ClientUuid, StatusError> {
    let actor = depot.actor_or_401()?;

    authorize_tenant(actor, policy).map_err(into_status_error)
}
