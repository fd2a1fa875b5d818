//! End-to-end workflows against a real database.

use testresult::TestResult;

use crate::{
    auth::{
        AuthService, AuthServiceError, GuardError, Policy, authorize, authorize_tenant,
        password::Password,
    },
    domain::{
        administrators::{
            AdministratorsService,
            data::{NewAdministrator, NewAdministratorRole},
        },
        client_requests::{
            ClientRequestsService, ClientRequestsServiceError, data::NewClientRequest,
            records::ClientRequestStatus,
        },
        client_roles::{ClientRolesService, data::NewClientRole},
        client_users::{ClientUsersService, ClientUsersServiceError, data::NewClientUser},
        clients::ClientsService,
    },
    errors::{ClassifiedError, ErrorKind},
    test::TestContext,
};

fn application(company_email: &str, password: &str) -> NewClientRequest {
    NewClientRequest {
        company_name: "Acme".to_string(),
        company_email: company_email.to_string(),
        company_phone: "+44 20 7946 0000".to_string(),
        company_website: None,
        industry_type: "Manufacturing".to_string(),
        company_size: "11-50".to_string(),
        password: Password::new(password),
    }
}

fn staff(email: &str) -> NewClientUser {
    NewClientUser {
        email: email.to_string(),
        password: Password::new("staff password"),
        full_name: "Staff Member".to_string(),
        phone: None,
        role_uuid: None,
    }
}

#[tokio::test]
async fn onboarding_runs_from_submission_to_signup() -> TestResult {
    let ctx = TestContext::new().await;
    let administrator = ctx.create_administrator("root", "root password").await;

    let submitted = ctx
        .client_requests
        .submit_request(application("a@x.com", "staged password"))
        .await?;

    assert_eq!(submitted.status, ClientRequestStatus::Pending);

    let approved = ctx
        .client_requests
        .approve_request(submitted.uuid, administrator.uuid)
        .await?;

    assert_eq!(approved.status, ClientRequestStatus::Approved);
    assert_eq!(approved.approved_by, Some(administrator.uuid));
    assert!(approved.approved_at.is_some());

    let client = ctx
        .client_requests
        .materialize_client(submitted.uuid, Password::new("staged password"))
        .await?;

    assert_eq!(client.request_uuid, submitted.uuid);
    assert!(client.is_verified);

    let again = ctx
        .client_requests
        .materialize_client(submitted.uuid, Password::new("staged password"))
        .await;

    assert!(
        matches!(again, Err(ClientRequestsServiceError::AlreadyMaterialized)),
        "got {again:?}"
    );

    let login = ctx
        .auth
        .login_client("A@X.com", Password::new("staged password"))
        .await?;

    assert_eq!(login.record.uuid, client.uuid);
    assert_eq!(ctx.clients.get_profile(client.uuid).await?.company_email, "a@x.com");

    let stats = ctx.administrators.dashboard_stats().await?;

    assert_eq!(stats.approved_client_requests, 1);
    assert_eq!(stats.total_clients, 1);

    Ok(())
}

#[tokio::test]
async fn terminal_requests_refuse_further_transitions() -> TestResult {
    let ctx = TestContext::new().await;
    let administrator = ctx.create_administrator("root", "root password").await;

    let request = ctx
        .client_requests
        .submit_request(application("b@x.com", "staged password"))
        .await?;

    ctx.client_requests
        .reject_request(request.uuid, administrator.uuid)
        .await?;

    let approve = ctx
        .client_requests
        .approve_request(request.uuid, administrator.uuid)
        .await;

    assert!(
        approve
            .as_ref()
            .is_err_and(|error| error.kind() == ErrorKind::InvalidStateTransition),
        "got {approve:?}"
    );

    // Rejection frees the email for a fresh application.
    ctx.client_requests
        .submit_request(application("b@x.com", "staged password"))
        .await?;

    let duplicate = ctx
        .client_requests
        .submit_request(application("b@x.com", "staged password"))
        .await;

    assert!(
        matches!(duplicate, Err(ClientRequestsServiceError::DuplicateRequest)),
        "got {duplicate:?}"
    );

    Ok(())
}

#[tokio::test]
async fn staff_are_invisible_to_other_tenants() -> TestResult {
    let ctx = TestContext::new().await;
    let administrator = ctx.create_administrator("root", "root password").await;

    let mut tenants = Vec::new();

    for email in ["a@x.com", "b@x.com"] {
        let request = ctx
            .client_requests
            .submit_request(application(email, "staged password"))
            .await?;

        ctx.client_requests
            .approve_request(request.uuid, administrator.uuid)
            .await?;

        tenants.push(
            ctx.client_requests
                .materialize_client(request.uuid, Password::new("staged password"))
                .await?,
        );
    }

    let (client_a, client_b) = (&tenants[0], &tenants[1]);

    let role = ctx
        .client_roles
        .create_role(NewClientRole {
            name: "Accountant".to_string(),
        })
        .await?;

    let created = ctx
        .client_users
        .create_user(
            client_a.uuid,
            NewClientUser {
                role_uuid: Some(role.uuid),
                ..staff("staff@x.com")
            },
        )
        .await?;

    assert_eq!(created.role_name.as_deref(), Some("Accountant"));

    let foreign = ctx.client_users.get_user(client_b.uuid, created.uuid).await;

    assert!(
        matches!(foreign, Err(ClientUsersServiceError::NotFound)),
        "got {foreign:?}"
    );
    assert!(ctx.client_users.list_users(client_b.uuid).await?.is_empty());
    assert_eq!(ctx.client_users.list_users(client_a.uuid).await?.len(), 1);

    let staff_login = ctx
        .auth
        .login_client_user("staff@x.com", Password::new("staff password"))
        .await?;

    let actor = ctx
        .auth
        .authenticate_bearer(&staff_login.tokens.access_token)
        .await?;

    assert_eq!(authorize_tenant(&actor, &Policy::TenantMember)?, client_a.uuid);
    assert!(authorize(&actor, &Policy::ClientOwner).is_err());

    Ok(())
}

#[tokio::test]
async fn deactivation_revokes_outstanding_tokens() -> TestResult {
    let ctx = TestContext::new().await;
    let administrator = ctx.create_administrator("root", "root password").await;

    let login = ctx
        .auth
        .login_administrator("root", Password::new("root password"))
        .await?;

    ctx.auth
        .authenticate_bearer(&login.tokens.access_token)
        .await?;

    ctx.administrators.toggle_status(administrator.uuid).await?;

    let after = ctx
        .auth
        .authenticate_bearer(&login.tokens.access_token)
        .await;

    assert!(
        matches!(after, Err(AuthServiceError::ActorInactive)),
        "got {after:?}"
    );

    let relogin = ctx
        .auth
        .login_administrator("root", Password::new("root password"))
        .await;

    assert!(
        relogin
            .as_ref()
            .is_err_and(|error| error.kind() == ErrorKind::InvalidCredentials),
        "got {relogin:?}"
    );

    Ok(())
}

#[tokio::test]
async fn deactivated_administrator_role_grants_nothing() -> TestResult {
    let ctx = TestContext::new().await;

    let role = ctx
        .administrators
        .create_role(NewAdministratorRole {
            name: "superuser".to_string(),
        })
        .await?;

    let administrator = ctx
        .administrators
        .create_administrator(NewAdministrator {
            username: "root".to_string(),
            email: "root@example.com".to_string(),
            password: Password::new("root password"),
            first_name: "Test".to_string(),
            mid_name: None,
            last_name: "Administrator".to_string(),
            phone: None,
            designation: None,
            role_uuid: Some(role.uuid),
        })
        .await?;

    assert_eq!(administrator.role_name.as_deref(), Some("superuser"));

    let policy = Policy::Administrator {
        role: Some("superuser"),
    };

    let login = ctx
        .auth
        .login_administrator("root", Password::new("root password"))
        .await?;

    let actor = ctx
        .auth
        .authenticate_bearer(&login.tokens.access_token)
        .await?;

    assert_eq!(authorize(&actor, &policy), Ok(()));

    sqlx::query("UPDATE administrator_roles SET is_active = FALSE WHERE uuid = $1")
        .bind(role.uuid.into_uuid())
        .execute(ctx.db.pool())
        .await?;

    let actor = ctx
        .auth
        .authenticate_bearer(&login.tokens.access_token)
        .await?;

    assert_eq!(authorize(&actor, &policy), Err(GuardError::MissingRole));

    let stored = ctx.administrators.get_administrator(administrator.uuid).await?;

    assert_eq!(stored.role_uuid, Some(role.uuid));
    assert_eq!(stored.role_name, None);

    Ok(())
}
