//! Update Client Role Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::{auth::Policy, domain::client_roles::data::ClientRoleUpdate};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientRoleResponse, state::State,
};

/// Update Client Role Request
///
/// An omitted name is left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateClientRoleRequest {
    pub name: Option<String>,
}

/// Update Client Role Handler
#[endpoint(
    tags("client"),
    summary = "Update Client Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Role updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid name"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::CONFLICT, description = "Role name already in use"),
    ),
)]
pub(crate) async fn handler(
    role: PathParam<Uuid>,
    json: JsonBody<UpdateClientRoleRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientRoleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_tenant(depot, &Policy::ClientOwner)?;

    let role = state
        .app
        .client_roles
        .update_role(
            role.into_inner().into(),
            ClientRoleUpdate {
                name: json.into_inner().name,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(role.into()))
}
