//! Update Client User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::{auth::Policy, domain::client_users::data::ClientUserUpdate};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientUserResponse, state::State,
};

/// Update Client User Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateClientUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role_uuid: Option<Uuid>,
}

impl From<UpdateClientUserRequest> for ClientUserUpdate {
    fn from(request: UpdateClientUserRequest) -> Self {
        ClientUserUpdate {
            email: request.email,
            full_name: request.full_name,
            phone: request.phone,
            role_uuid: request.role_uuid.map(Into::into),
        }
    }
}

/// Update Client User Handler
#[endpoint(
    tags("client"),
    summary = "Update Client User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UpdateClientUserRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientUserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::ClientOwner)?;

    let user = state
        .app
        .client_users
        .update_user(tenant, user.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tenantry_app::domain::client_users::MockClientUsersService;

    use crate::test_helpers::{TestServices, make_client, make_client_user};

    use super::*;

    #[tokio::test]
    async fn test_only_given_fields_are_updated() -> TestResult {
        let client = make_client("a@x.com");
        let mut user = make_client_user(client.uuid, "staff@x.com");
        let (owner, uuid) = (client.uuid, user.uuid);

        user.full_name = "Renamed".to_string();

        let mut client_users = MockClientUsersService::new();

        client_users
            .expect_update_user()
            .once()
            .withf(move |tenant, requested, update| {
                *tenant == owner
                    && *requested == uuid
                    && *update
                        == ClientUserUpdate {
                            full_name: Some("Renamed".to_string()),
                            ..ClientUserUpdate::default()
                        }
            })
            .return_once(move |_, _, _| Ok(user));

        let service = TestServices {
            client_users,
            ..TestServices::default()
        }
        .serve(
            Some((&client).into()),
            Router::with_path("client/users/{user}").patch(handler),
        );

        let mut res = TestClient::patch(format!("http://example.com/client/users/{uuid}"))
            .json(&json!({ "full_name": "Renamed" }))
            .send(&service)
            .await;

        let body: ClientUserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.full_name, "Renamed");

        Ok(())
    }
}
