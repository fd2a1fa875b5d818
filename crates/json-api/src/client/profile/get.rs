//! Get Client Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*, responses::ClientResponse,
    state::State,
};

/// Get Client Profile Handler
///
/// Client users see the profile of the client they belong to.
#[endpoint(
    tags("client"),
    summary = "Get Client Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::TenantMember)?;

    let client = state
        .app
        .clients
        .get_profile(tenant)
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.into()))
}
