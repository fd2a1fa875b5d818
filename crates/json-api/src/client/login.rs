//! Client Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::auth::password::Password;

use crate::{
    errors::into_status_error,
    extensions::*,
    responses::{ClientResponse, TokenResponse},
    state::State,
};

/// Client Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientLoginRequest {
    pub company_email: String,
    pub password: String,
}

impl std::fmt::Debug for ClientLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientLoginRequest")
            .field("company_email", &self.company_email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientLoginResponse {
    pub tokens: TokenResponse,
    pub client: ClientResponse,
}

/// Client Login Handler
#[endpoint(
    tags("client"),
    summary = "Client Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ClientLoginRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientLoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let login = state
        .app
        .auth
        .login_client(&request.company_email, Password::new(request.password))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ClientLoginResponse {
        tokens: login.tokens.into(),
        client: login.record.into(),
    }))
}
