//! Create Client User Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::{
    auth::{Policy, password::Password},
    domain::client_users::data::NewClientUser,
};

use crate::{
    client::acting_tenant, errors::into_status_error, extensions::*,
    responses::ClientUserResponse, state::State,
};

/// Create Client User Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateClientUserRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role_uuid: Option<Uuid>,
}

impl std::fmt::Debug for CreateClientUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateClientUserRequest")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("role_uuid", &self.role_uuid)
            .finish_non_exhaustive()
    }
}

impl From<CreateClientUserRequest> for NewClientUser {
    fn from(request: CreateClientUserRequest) -> Self {
        NewClientUser {
            email: request.email,
            password: Password::new(request.password),
            full_name: request.full_name,
            phone: request.phone,
            role_uuid: request.role_uuid.map(Into::into),
        }
    }
}

/// Create Client User Handler
///
/// The user always belongs to the acting client.
#[endpoint(
    tags("client"),
    summary = "Create Client User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateClientUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientUserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = acting_tenant(depot, &Policy::ClientOwner)?;

    let user = state
        .app
        .client_users
        .create_user(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/client/users/{}", user.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use tenantry_app::{
        auth::AuthenticatedActor,
        domain::client_users::{ClientUsersServiceError, MockClientUsersService},
    };

    use crate::test_helpers::{TestServices, make_client, make_client_user};

    use super::*;

    fn payload() -> Value {
        json!({
            "email": "staff@x.com",
            "password": "staff password",
            "full_name": "Staff Member",
        })
    }

    fn make_service(client_users: MockClientUsersService, actor: AuthenticatedActor) -> Service {
        TestServices {
            client_users,
            ..TestServices::default()
        }
        .serve(Some(actor), Router::with_path("client/users").post(handler))
    }

    #[tokio::test]
    async fn test_user_is_created_under_acting_client() -> TestResult {
        let client = make_client("a@x.com");
        let owner = client.uuid;
        let created = make_client_user(owner, "staff@x.com");
        let uuid = created.uuid;

        let mut client_users = MockClientUsersService::new();

        client_users
            .expect_create_user()
            .once()
            .withf(move |tenant, new| {
                *tenant == owner
                    && new.email == "staff@x.com"
                    && new.password.expose() == "staff password"
            })
            .return_once(move |_, _| Ok(created));

        let mut res = TestClient::post("http://example.com/client/users")
            .json(&payload())
            .send(&make_service(client_users, (&client).into()))
            .await;

        let body: ClientUserResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/client/users/{uuid}").as_str()));
        assert_eq!(body.client_uuid, owner.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_409() -> TestResult {
        let mut client_users = MockClientUsersService::new();

        client_users
            .expect_create_user()
            .once()
            .return_once(|_, _| Err(ClientUsersServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/client/users")
            .json(&payload())
            .send(&make_service(client_users, (&make_client("a@x.com")).into()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_client_users_cannot_create_users() -> TestResult {
        let client = make_client("a@x.com");

        let mut client_users = MockClientUsersService::new();

        client_users.expect_create_user().never();

        let res = TestClient::post("http://example.com/client/users")
            .json(&payload())
            .send(&make_service(
                client_users,
                (&make_client_user(client.uuid, "lead@x.com")).into(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
