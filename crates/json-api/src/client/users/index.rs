//! List Client Users Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientUserResponse, state::State,
};

/// List Client Users Handler
///
/// Only users belonging to the acting tenant are returned.
#[endpoint(
    tags("client"),
    summary = "List Client Users",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ClientUserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::TenantMember)?;

    let users = state
        .app
        .client_users
        .list_users(tenant)
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
