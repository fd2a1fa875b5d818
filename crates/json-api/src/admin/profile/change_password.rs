//! Change Administrator Password Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::{
    auth::{Policy, password::Password},
    domain::administrators::data::PasswordChange,
};

use crate::{admin::acting_administrator, errors::into_status_error, extensions::*, state::State};

/// Change Password Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest").finish_non_exhaustive()
    }
}

impl From<ChangePasswordRequest> for PasswordChange {
    fn from(request: ChangePasswordRequest) -> Self {
        PasswordChange {
            old_password: Password::new(request.old_password),
            new_password: Password::new(request.new_password),
            confirm_password: Password::new(request.confirm_password),
        }
    }
}

/// Change Administrator Password Handler
///
/// Requires the current password. Outstanding tokens stay valid.
#[endpoint(
    tags("admin"),
    summary = "Change Own Password",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Password changed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Wrong or unconfirmed password"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ChangePasswordRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let administrator = acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    state
        .app
        .administrators
        .change_password(administrator, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
