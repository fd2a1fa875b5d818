//! List Administrators Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// List Administrators Handler
#[endpoint(
    tags("admin"),
    summary = "List Administrators",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<AdministratorResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let administrators = state
        .app
        .administrators
        .list_administrators()
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrators.into_iter().map(Into::into).collect()))
}
