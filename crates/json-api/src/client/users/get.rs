//! Get Client User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientUserResponse, state::State,
};

/// Get Client User Handler
///
/// Users of other tenants are reported as not found.
#[endpoint(
    tags("client"),
    summary = "Get Client User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientUserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::TenantMember)?;

    let user = state
        .app
        .client_users
        .get_user(tenant, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tenantry_app::domain::{
        client_users::{ClientUsersServiceError, MockClientUsersService},
        clients::records::ClientRecord,
    };

    use crate::test_helpers::{TestServices, make_client, make_client_user};

    use super::*;

    fn make_service(client_users: MockClientUsersService, client: &ClientRecord) -> Service {
        TestServices {
            client_users,
            ..TestServices::default()
        }
        .serve(
            Some(client.into()),
            Router::with_path("client/users/{user}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_own_user_is_returned() -> TestResult {
        let client = make_client("a@x.com");
        let user = make_client_user(client.uuid, "staff@x.com");
        let (owner, uuid) = (client.uuid, user.uuid);

        let mut client_users = MockClientUsersService::new();

        client_users
            .expect_get_user()
            .once()
            .withf(move |tenant, requested| *tenant == owner && *requested == uuid)
            .return_once(move |_, _| Ok(user));

        let mut res = TestClient::get(format!("http://example.com/client/users/{uuid}"))
            .send(&make_service(client_users, &client))
            .await;

        let body: ClientUserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.email, "staff@x.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_other_tenants_user_returns_404() -> TestResult {
        let client = make_client("a@x.com");
        let foreign = make_client_user(make_client("b@x.com").uuid, "staff@b.com");

        let mut client_users = MockClientUsersService::new();

        client_users
            .expect_get_user()
            .once()
            .return_once(|_, _| Err(ClientUsersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/client/users/{}", foreign.uuid))
            .send(&make_service(client_users, &client))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
