//! Toggle Client User Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientUserResponse, state::State,
};

/// Toggle Client User Status Handler
#[endpoint(
    tags("client"),
    summary = "Toggle Client User Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientUserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::ClientOwner)?;

    let user = state
        .app
        .client_users
        .toggle_status(tenant, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
