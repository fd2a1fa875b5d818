//! Client User Login Handler

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
    responses::{ClientUserResponse, TokenResponse},
    state::State,
};

/// Client User Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientUserLoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for ClientUserLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientUserLoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientUserLoginResponse {
    pub tokens: TokenResponse,
    pub user: ClientUserResponse,
}

/// Client User Login Handler
///
/// Users of a deactivated client cannot log in.
#[endpoint(
    tags("client"),
    summary = "Client User Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ClientUserLoginRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientUserLoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let login = state
        .app
        .auth
        .login_client_user(&request.email, Password::new(request.password))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ClientUserLoginResponse {
        tokens: login.tokens.into(),
        user: login.record.into(),
    }))
}
