//! Toggle Client Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientResponse, state::State,
};

/// Toggle Client Status Handler
///
/// A deactivated client can no longer log in, and neither can its users.
#[endpoint(
    tags("admin"),
    summary = "Toggle Client Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    client: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let client = state
        .app
        .clients
        .toggle_status(client.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.into()))
}
