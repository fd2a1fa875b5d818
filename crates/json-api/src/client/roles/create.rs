//! Create Client Role Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::{auth::Policy, domain::client_roles::data::NewClientRole};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientRoleResponse, state::State,
};

/// Create Client Role Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateClientRoleRequest {
    pub name: String,
}

/// Create Client Role Handler
#[endpoint(
    tags("client"),
    summary = "Create Client Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Role created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid name"),
        (status_code = StatusCode::CONFLICT, description = "Role name already in use"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateClientRoleRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientRoleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_tenant(depot, &Policy::ClientOwner)?;

    let role = state
        .app
        .client_roles
        .create_role(NewClientRole {
            name: json.into_inner().name,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(role.into()))
}
