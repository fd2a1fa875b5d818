//! Toggle Client Role Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientRoleResponse, state::State,
};

/// Toggle Client Role Status Handler
///
/// Deactivated roles can no longer be assigned to users.
#[endpoint(
    tags("client"),
    summary = "Toggle Client Role Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status toggled"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
    ),
)]
pub(crate) async fn handler(
    role: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientRoleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_tenant(depot, &Policy::ClientOwner)?;

    let role = state
        .app
        .client_roles
        .toggle_status(role.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(role.into()))
}
