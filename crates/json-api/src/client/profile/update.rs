//! Update Client Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::{auth::Policy, domain::clients::data::ClientProfileUpdate};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*, responses::ClientResponse,
    state::State,
};

/// Update Client Profile Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateClientProfileRequest {
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_website: Option<String>,
    pub industry_type: Option<String>,
    pub company_size: Option<String>,
}

impl From<UpdateClientProfileRequest> for ClientProfileUpdate {
    fn from(request: UpdateClientProfileRequest) -> Self {
        ClientProfileUpdate {
            company_name: request.company_name,
            company_phone: request.company_phone,
            company_website: request.company_website,
            industry_type: request.industry_type,
            company_size: request.company_size,
        }
    }
}

/// Update Client Profile Handler
#[endpoint(
    tags("client"),
    summary = "Update Client Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::FORBIDDEN, description = "Only the client account may edit"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateClientProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::ClientOwner)?;

    let client = state
        .app
        .clients
        .update_profile(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tenantry_app::{auth::AuthenticatedActor, domain::clients::MockClientsService};

    use crate::test_helpers::{TestServices, make_client, make_client_user};

    use super::*;

    fn make_service(clients: MockClientsService, actor: AuthenticatedActor) -> Service {
        TestServices {
            clients,
            ..TestServices::default()
        }
        .serve(
            Some(actor),
            Router::with_path("client/profile").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_owner_updates_profile() -> TestResult {
        let client = make_client("a@x.com");
        let owner = client.uuid;
        let actor = (&client).into();

        let mut updated = client.clone();

        updated.company_name = "Acme Holdings".to_string();

        let mut clients = MockClientsService::new();

        clients
            .expect_update_profile()
            .once()
            .withf(move |tenant, update| {
                *tenant == owner
                    && *update
                        == ClientProfileUpdate {
                            company_name: Some("Acme Holdings".to_string()),
                            ..ClientProfileUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(updated));

        let mut res = TestClient::patch("http://example.com/client/profile")
            .json(&json!({ "company_name": "Acme Holdings" }))
            .send(&make_service(clients, actor))
            .await;

        let body: ClientResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.company_name, "Acme Holdings");

        Ok(())
    }

    #[tokio::test]
    async fn test_client_users_cannot_update_profile() -> TestResult {
        let client = make_client("a@x.com");

        let mut clients = MockClientsService::new();

        clients.expect_update_profile().never();

        let res = TestClient::patch("http://example.com/client/profile")
            .json(&json!({ "company_name": "Hijacked" }))
            .send(&make_service(
                clients,
                (&make_client_user(client.uuid, "staff@x.com")).into(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
