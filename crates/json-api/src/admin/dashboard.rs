//! Dashboard Stats Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::DashboardStatsResponse, state::State,
};

/// Dashboard Stats Handler
///
/// Headline counts of administrators, onboarding requests and clients.
#[endpoint(
    tags("admin"),
    summary = "Dashboard Stats",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<DashboardStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let stats = state
        .app
        .administrators
        .dashboard_stats()
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
