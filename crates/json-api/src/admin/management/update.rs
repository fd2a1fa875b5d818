//! Update Administrator Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    admin::{acting_administrator, profile::update::UpdateAdministratorProfileRequest},
    errors::into_status_error,
    extensions::*,
    responses::AdministratorResponse,
    state::State,
};

/// Update Administrator Handler
///
/// Edits another administrator's profile. Omitted fields are left unchanged.
#[endpoint(
    tags("admin"),
    summary = "Update Administrator",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Administrator updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::NOT_FOUND, description = "Administrator not found"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
    ),
)]
pub(crate) async fn handler(
    administrator: PathParam<Uuid>,
    json: JsonBody<UpdateAdministratorProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &state.management_policy())?;

    let administrator = state
        .app
        .administrators
        .update_profile(administrator.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrator.into()))
}
