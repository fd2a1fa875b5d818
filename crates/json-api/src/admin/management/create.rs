//! Create Administrator Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::{auth::password::Password, domain::administrators::data::NewAdministrator};

use crate::{
    admin::acting_administrator, errors::into_status_error, extensions::*,
    responses::AdministratorResponse, state::State,
};

/// Create Administrator Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAdministratorRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    #[serde(default)]
    pub mid_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub role_uuid: Option<Uuid>,
}

impl std::fmt::Debug for CreateAdministratorRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAdministratorRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role_uuid", &self.role_uuid)
            .finish_non_exhaustive()
    }
}

impl From<CreateAdministratorRequest> for NewAdministrator {
    fn from(request: CreateAdministratorRequest) -> Self {
        NewAdministrator {
            username: request.username,
            email: request.email,
            password: Password::new(request.password),
            first_name: request.first_name,
            mid_name: request.mid_name,
            last_name: request.last_name,
            phone: request.phone,
            designation: request.designation,
            role_uuid: request.role_uuid.map(Into::into),
        }
    }
}

/// Create Administrator Handler
#[endpoint(
    tags("admin"),
    summary = "Create Administrator",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Administrator created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::FORBIDDEN, description = "Management role required"),
        (status_code = StatusCode::CONFLICT, description = "Username or email already in use"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAdministratorRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AdministratorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    acting_administrator(depot, &state.management_policy())?;

    let administrator = state
        .app
        .administrators
        .create_administrator(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/admin/management/{}", administrator.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(administrator.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use tenantry_app::{
        auth::AuthenticatedActor,
        domain::administrators::{AdministratorsServiceError, MockAdministratorsService},
    };

    use crate::test_helpers::{TestServices, make_administrator};

    use super::*;

    fn payload() -> Value {
        json!({
            "username": "ops",
            "email": "ops@example.com",
            "password": "initial password",
            "first_name": "Ops",
            "last_name": "Person",
        })
    }

    fn make_service(
        administrators: MockAdministratorsService,
        actor: AuthenticatedActor,
        management_role: Option<&str>,
    ) -> Service {
        TestServices {
            administrators,
            management_role: management_role.map(str::to_string),
            ..TestServices::default()
        }
        .serve(
            Some(actor),
            Router::with_path("admin/management").post(handler),
        )
    }

    fn superuser() -> AuthenticatedActor {
        let mut record = make_administrator("root");

        record.role_name = Some("Superuser".to_string());

        (&record).into()
    }

    #[tokio::test]
    async fn test_create_administrator_returns_201() -> TestResult {
        let created = make_administrator("ops");
        let uuid = created.uuid;

        let mut administrators = MockAdministratorsService::new();

        administrators
            .expect_create_administrator()
            .once()
            .withf(|new| new.username == "ops" && new.password.expose() == "initial password")
            .return_once(move |_| Ok(created));

        let mut res = TestClient::post("http://example.com/admin/management")
            .json(&payload())
            .send(&make_service(administrators, superuser(), Some("Superuser")))
            .await;

        let body: AdministratorResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/admin/management/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_management_role_is_enforced() -> TestResult {
        let mut administrators = MockAdministratorsService::new();

        administrators.expect_create_administrator().never();

        let res = TestClient::post("http://example.com/admin/management")
            .json(&payload())
            .send(&make_service(
                administrators,
                (&make_administrator("support")).into(),
                Some("Superuser"),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_returns_409() -> TestResult {
        let mut administrators = MockAdministratorsService::new();

        administrators
            .expect_create_administrator()
            .once()
            .return_once(|_| Err(AdministratorsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/management")
            .json(&payload())
            .send(&make_service(
                administrators,
                (&make_administrator("root")).into(),
                None,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
