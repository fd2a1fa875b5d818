//! Client Signup Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::auth::password::Password;

use crate::{errors::into_status_error, extensions::*, responses::ClientResponse, state::State};

/// Client Signup Request
///
/// `password` must match the one given when the request was submitted.
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientSignupRequest {
    pub request_id: Uuid,
    pub password: String,
}

impl std::fmt::Debug for ClientSignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSignupRequest")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}

/// Client Signup Handler
///
/// Turns an approved onboarding request into a client account.
#[endpoint(
    tags("client"),
    summary = "Client Signup",
    responses(
        (status_code = StatusCode::CREATED, description = "Client created"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Password does not match"),
        (status_code = StatusCode::NOT_FOUND, description = "Request not found"),
        (status_code = StatusCode::CONFLICT, description = "Request not approved or already used"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ClientSignupRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let client = state
        .app
        .client_requests
        .materialize_client(request.request_id.into(), Password::new(request.password))
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(client.into()))
}
