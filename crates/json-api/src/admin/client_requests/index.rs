//! List Client Requests Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use tenantry_app::{auth::Policy, domain::client_requests::records::ClientRequestStatus};

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientRequestResponse, state::State,
};

/// List Client Requests Handler
///
/// Newest first, optionally filtered by `status`.
#[endpoint(
    tags("admin"),
    summary = "List Client Requests",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ClientRequestResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let status = status
        .into_inner()
        .map(|value| value.parse::<ClientRequestStatus>())
        .transpose()
        .or_400("status")?;

    let requests = state
        .app
        .client_requests
        .list_requests(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(requests.into_iter().map(Into::into).collect()))
}
