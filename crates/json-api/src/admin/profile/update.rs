//! Update Administrator Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::{auth::Policy, domain::administrators::data::AdministratorUpdate};

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// Update Administrator Profile Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateAdministratorProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub mid_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

impl From<UpdateAdministratorProfileRequest> for AdministratorUpdate {
    fn from(request: UpdateAdministratorProfileRequest) -> Self {
        AdministratorUpdate {
            email: request.email,
            first_name: request.first_name,
            mid_name: request.mid_name,
            last_name: request.last_name,
            phone: request.phone,
            designation: request.designation,
        }
    }
}

/// Update Administrator Profile Handler
#[endpoint(
    tags("admin"),
    summary = "Update Own Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateAdministratorProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let administrator = acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let administrator = state
        .app
        .administrators
        .update_profile(administrator, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrator.into()))
}
