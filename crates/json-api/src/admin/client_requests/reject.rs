//! Reject Client Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientRequestResponse, state::State,
};

/// Reject Client Request Handler
///
/// Only pending requests can be rejected.
#[endpoint(
    tags("admin"),
    summary = "Reject Client Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Request rejected"),
        (status_code = StatusCode::NOT_FOUND, description = "Request not found"),
        (status_code = StatusCode::CONFLICT, description = "Request is not pending"),
    ),
)]
pub(crate) async fn handler(
    request: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let reviewer = acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let request = state
        .app
        .client_requests
        .reject_request(request.into_inner().into(), reviewer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
