//! List Clients Handler

use std::sync::Arc;

use salvo::prelude::*;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientResponse, state::State,
};

/// List Clients Handler
#[endpoint(
    tags("admin"),
    summary = "List Clients",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ClientResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let clients = state
        .app
        .clients
        .list_clients()
        .await
        .map_err(into_status_error)?;

    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tenantry_app::domain::clients::MockClientsService;

    use crate::test_helpers::{TestServices, make_administrator, make_client};

    use super::*;

    #[tokio::test]
    async fn test_list_clients() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_list_clients()
            .once()
            .return_once(|| Ok(vec![make_client("a@x.com")]));

        let service = TestServices {
            clients,
            ..TestServices::default()
        }
        .serve(
            Some((&make_administrator("root")).into()),
            Router::with_path("admin/clients").get(handler),
        );

        let mut res = TestClient::get("http://example.com/admin/clients")
            .send(&service)
            .await;

        let body: Vec<ClientResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].company_email, "a@x.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_clients_cannot_list_clients() -> TestResult {
        let client = make_client("a@x.com");

        let mut clients = MockClientsService::new();

        clients.expect_list_clients().never();

        let service = TestServices {
            clients,
            ..TestServices::default()
        }
        .serve(
            Some((&client).into()),
            Router::with_path("admin/clients").get(handler),
        );

        let res = TestClient::get("http://example.com/admin/clients")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
