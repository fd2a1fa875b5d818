//! Get Administrator Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// Get Administrator Handler
#[endpoint(
    tags("admin"),
    summary = "Get Administrator",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    administrator: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let administrator = state
        .app
        .administrators
        .get_administrator(administrator.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrator.into()))
}
