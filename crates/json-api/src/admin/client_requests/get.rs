//! Get Client Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientRequestResponse, state::State,
};

/// Get Client Request Handler
#[endpoint(
    tags("admin"),
    summary = "Get Client Request",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    request: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let request = state
        .app
        .client_requests
        .get_request(request.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
