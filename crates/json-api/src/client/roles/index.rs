//! List Client Roles Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::{ActorKind, Policy};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientRoleResponse, state::State,
};

/// List Client Roles Handler
///
/// Client users see active roles only. The owning client also sees inactive ones.
#[endpoint(
    tags("client"),
    summary = "List Client Roles",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ClientRoleResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_tenant(depot, &Policy::TenantMember)?;

    let include_inactive = depot.actor_or_401()?.kind() == ActorKind::Client;

    let roles = state
        .app
        .client_roles
        .list_roles(include_inactive)
        .await
        .map_err(into_status_error)?;

    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tenantry_app::domain::client_roles::MockClientRolesService;

    use crate::test_helpers::{TestServices, make_client, make_client_role, make_client_user};

    use super::*;

    #[tokio::test]
    async fn test_client_users_can_list_roles() -> TestResult {
        let client = make_client("a@x.com");

        let mut client_roles = MockClientRolesService::new();

        client_roles
            .expect_list_roles()
            .once()
            .withf(|include_inactive| !*include_inactive)
            .return_once(|_| Ok(vec![make_client_role("Accountant"), make_client_role("Sales")]));

        let service = TestServices {
            client_roles,
            ..TestServices::default()
        }
        .serve(
            Some((&make_client_user(client.uuid, "staff@x.com")).into()),
            Router::with_path("client/roles").get(handler),
        );

        let mut res = TestClient::get("http://example.com/client/roles")
            .send(&service)
            .await;

        let body: Vec<ClientRoleResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_owner_also_sees_inactive_roles() -> TestResult {
        let mut inactive = make_client_role("Retired");

        inactive.is_active = false;

        let mut client_roles = MockClientRolesService::new();

        client_roles
            .expect_list_roles()
            .once()
            .withf(|include_inactive| *include_inactive)
            .return_once(move |_| Ok(vec![make_client_role("Accountant"), inactive]));

        let service = TestServices {
            client_roles,
            ..TestServices::default()
        }
        .serve(
            Some((&make_client("a@x.com")).into()),
            Router::with_path("client/roles").get(handler),
        );

        let mut res = TestClient::get("http://example.com/client/roles")
            .send(&service)
            .await;

        let body: Vec<ClientRoleResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.iter().filter(|role| !role.is_active).count(), 1);

        Ok(())
    }
}
