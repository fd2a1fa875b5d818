//! Submit Client Request Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tenantry_app::{
    auth::password::Password, domain::client_requests::data::NewClientRequest,
};

use crate::{
    errors::into_status_error, extensions::*, responses::ClientRequestResponse, state::State,
};

/// Submit Client Request
///
/// The password is hashed immediately and becomes the client's password once
/// the request is approved and the client signs up.
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitClientRequest {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    #[serde(default)]
    pub company_website: Option<String>,
    pub industry_type: String,
    pub company_size: String,
    pub password: String,
}

impl std::fmt::Debug for SubmitClientRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitClientRequest")
            .field("company_name", &self.company_name)
            .field("company_email", &self.company_email)
            .finish_non_exhaustive()
    }
}

impl From<SubmitClientRequest> for NewClientRequest {
    fn from(request: SubmitClientRequest) -> Self {
        NewClientRequest {
            company_name: request.company_name,
            company_email: request.company_email,
            company_phone: request.company_phone,
            company_website: request.company_website,
            industry_type: request.industry_type,
            company_size: request.company_size,
            password: Password::new(request.password),
        }
    }
}

/// Submit Client Request Handler
#[endpoint(
    tags("client"),
    summary = "Submit Onboarding Request",
    responses(
        (status_code = StatusCode::CREATED, description = "Request submitted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::CONFLICT, description = "A pending request already exists"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubmitClientRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = state
        .app
        .client_requests
        .submit_request(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/admin/client-requests/{}", request.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(request.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use tenantry_app::{
        domain::client_requests::{
            ClientRequestsServiceError, MockClientRequestsService, records::ClientRequestStatus,
        },
        validation::FieldErrors,
    };

    use crate::test_helpers::{TestServices, make_client_request};

    use super::*;

    fn payload() -> Value {
        json!({
            "company_name": "Acme",
            "company_email": "a@x.com",
            "company_phone": "+44 20 7946 0000",
            "industry_type": "Manufacturing",
            "company_size": "11-50",
            "password": "staged password",
        })
    }

    fn make_service(client_requests: MockClientRequestsService) -> Service {
        TestServices {
            client_requests,
            ..TestServices::default()
        }
        .serve(None, Router::with_path("client/request").post(handler))
    }

    #[tokio::test]
    async fn test_submit_returns_201_pending() -> TestResult {
        let submitted = make_client_request("a@x.com", ClientRequestStatus::Pending);

        let mut client_requests = MockClientRequestsService::new();

        client_requests
            .expect_submit_request()
            .once()
            .withf(|new| new.company_email == "a@x.com" && new.company_website.is_none())
            .return_once(move |_| Ok(submitted));

        let mut res = TestClient::post("http://example.com/client/request")
            .json(&payload())
            .send(&make_service(client_requests))
            .await;

        let body: ClientRequestResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status, "pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_pending_request_returns_409() -> TestResult {
        let mut client_requests = MockClientRequestsService::new();

        client_requests
            .expect_submit_request()
            .once()
            .return_once(|_| Err(ClientRequestsServiceError::DuplicateRequest));

        let res = TestClient::post("http://example.com/client/request")
            .json(&payload())
            .send(&make_service(client_requests))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_fields_return_400() -> TestResult {
        let mut client_requests = MockClientRequestsService::new();

        client_requests.expect_submit_request().once().return_once(|_| {
            Err(ClientRequestsServiceError::Validation(FieldErrors::single(
                "company_email",
                "email",
            )))
        });

        let res = TestClient::post("http://example.com/client/request")
            .json(&payload())
            .send(&make_service(client_requests))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
