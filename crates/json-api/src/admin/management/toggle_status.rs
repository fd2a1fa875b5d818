//! Toggle Administrator Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// Toggle Administrator Status Handler
///
/// Deactivating an administrator also invalidates its outstanding tokens.
#[endpoint(
    tags("admin"),
    summary = "Toggle Administrator Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    administrator: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &state.management_policy())?;

    let administrator = state
        .app
        .administrators
        .toggle_status(administrator.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrator.into()))
}
