//! Approve Client Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use tenantry_app::auth::Policy;

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::ClientRequestResponse, state::State,
};

/// Approve Client Request Handler
///
/// Only pending requests can be approved.
#[endpoint(
    tags("admin"),
    summary = "Approve Client Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Request approved"),
        (status_code = StatusCode::NOT_FOUND, description = "Request not found"),
        (status_code = StatusCode::CONFLICT, description = "Request is not pending"),
    ),
)]
pub(crate) async fn handler(
    request: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let approver = acting_administrator(depot, &Policy::ADMINISTRATOR)?;

    let request = state
        .app
        .client_requests
        .approve_request(request.into_inner().into(), approver)
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tenantry_app::domain::{
        administrators::records::AdministratorRecord,
        client_requests::{
            ClientRequestsServiceError, MockClientRequestsService,
            records::{ClientRequestStatus, ClientRequestUuid},
        },
    };

    use crate::test_helpers::{TestServices, make_administrator, make_client_request};

    use super::*;

    fn make_service(
        client_requests: MockClientRequestsService,
        administrator: &AdministratorRecord,
    ) -> Service {
        TestServices {
            client_requests,
            ..TestServices::default()
        }
        .serve(
            Some(administrator.into()),
            Router::with_path("admin/client-requests/{request}/approve").post(handler),
        )
    }

    #[tokio::test]
    async fn test_approval_records_the_acting_administrator() -> TestResult {
        let administrator = make_administrator("root");
        let approver = administrator.uuid;

        let mut approved = make_client_request("a@x.com", ClientRequestStatus::Approved);
        approved.approved_by = Some(approver);
        approved.approved_at = Some(Timestamp::UNIX_EPOCH);

        let uuid = approved.uuid;

        let mut client_requests = MockClientRequestsService::new();

        client_requests
            .expect_approve_request()
            .once()
            .withf(move |request, by| *request == uuid && *by == approver)
            .return_once(move |_, _| Ok(approved));

        let mut res = TestClient::post(format!(
            "http://example.com/admin/client-requests/{uuid}/approve"
        ))
        .send(&make_service(client_requests, &administrator))
        .await;

        let body: ClientRequestResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "approved");
        assert_eq!(body.approved_by, Some(approver.into_uuid()));
        assert!(body.approved_at.is_some(), "approval time should be set");

        Ok(())
    }

    #[tokio::test]
    async fn test_terminal_request_returns_409() -> TestResult {
        let uuid = ClientRequestUuid::new();

        let mut client_requests = MockClientRequestsService::new();

        client_requests
            .expect_approve_request()
            .once()
            .return_once(|_, _| {
                Err(ClientRequestsServiceError::InvalidStateTransition {
                    status: ClientRequestStatus::Rejected,
                    action: "approve",
                })
            });

        let res = TestClient::post(format!(
            "http://example.com/admin/client-requests/{uuid}/approve"
        ))
        .send(&make_service(client_requests, &make_administrator("root")))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
