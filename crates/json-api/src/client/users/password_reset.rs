//! Reset Client User Password Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::auth::{Policy, password::Password};

use crate::{client::acting_tenant, errors::into_status_error, extensions::*, state::State};

/// Reset Client User Password Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ResetClientUserPasswordRequest {
    pub new_password: String,
}

impl std::fmt::Debug for ResetClientUserPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetClientUserPasswordRequest")
            .finish_non_exhaustive()
    }
}

/// Reset Client User Password Handler
#[endpoint(
    tags("client"),
    summary = "Reset Client User Password",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Password replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Password too weak"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<ResetClientUserPasswordRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::ClientOwner)?;

    state
        .app
        .client_users
        .reset_password(
            tenant,
            user.into_inner().into(),
            Password::new(json.into_inner().new_password),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
