//! Token Refresh Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::into_status_error, extensions::*, responses::TokenResponse, state::State};

/// Token Refresh Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct RefreshRequest {
    pub refresh_token: String,
}

impl std::fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshRequest").finish_non_exhaustive()
    }
}

/// Token Refresh Handler
///
/// Works for every actor kind. The subject is re-checked, so a deactivated
/// account cannot refresh.
#[endpoint(
    tags("auth"),
    summary = "Refresh Tokens",
    responses(
        (status_code = StatusCode::OK, description = "New token pair"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Refresh token rejected"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RefreshRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tokens = state
        .app
        .auth
        .refresh(&json.into_inner().refresh_token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(tokens.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tenantry_app::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::{TestServices, make_tokens};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        TestServices {
            auth,
            ..TestServices::default()
        }
        .serve(None, Router::with_path("auth/refresh").post(handler))
    }

    #[tokio::test]
    async fn test_refresh_returns_new_pair() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_refresh()
            .once()
            .withf(|token| token == "refresh")
            .return_once(|_| Ok(make_tokens()));

        let mut res = TestClient::post("http://example.com/auth/refresh")
            .json(&json!({ "refresh_token": "refresh" }))
            .send(&make_service(auth))
            .await;

        let body: TokenResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.access_token, "access");
        assert_eq!(body.expires_in, 900);

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_refresh_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_refresh()
            .once()
            .return_once(|_| Err(AuthServiceError::TokenExpired));

        let res = TestClient::post("http://example.com/auth/refresh")
            .json(&json!({ "refresh_token": "stale" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
