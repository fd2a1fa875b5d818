//! Get Administrator Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// Get Administrator Profile Handler
#[endpoint(
    tags("admin"),
    summary = "Get Own Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let administrator = acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let administrator = state
        .app
        .administrators
        .get_administrator(administrator)
        .await
        .map_err(into_status_error)?;

    Ok(Json(administrator.into()))
}
