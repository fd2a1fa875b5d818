//! Administrator Login Handler

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
    responses::{AdministratorResponse, TokenResponse},
    state::State,
};

/// Administrator Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct AdministratorLoginRequest {
    /// Username or email address
    pub identifier: String,
    pub password: String,
}

impl std::fmt::Debug for AdministratorLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdministratorLoginRequest")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdministratorLoginResponse {
    pub tokens: TokenResponse,
    pub administrator: AdministratorResponse,
}

/// Administrator Login Handler
#[endpoint(
    tags("admin"),
    summary = "Administrator Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AdministratorLoginRequest>,
    depot: &mut Depot,
) -> Result<Json<AdministratorLoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let login = state
        .app
        .auth
        .login_administrator(&request.identifier, Password::new(request.password))
        .await
        .map_err(into_status_error)?;

    Ok(Json(AdministratorLoginResponse {
        tokens: login.tokens.into(),
        administrator: login.record.into(),
    }))
}
