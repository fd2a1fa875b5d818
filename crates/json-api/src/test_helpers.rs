//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use tenantry_app::{
    auth::{AuthenticatedActor, MockAuthService, TokenPair},
    context::AppContext,
    domain::{
        administrators::{
            MockAdministratorsService,
            records::{AdministratorRecord, AdministratorUuid},
        },
        client_requests::{
            MockClientRequestsService,
            records::{ClientRequestRecord, ClientRequestStatus, ClientRequestUuid},
        },
        client_roles::{
            MockClientRolesService,
            records::{ClientRoleRecord, ClientRoleUuid},
        },
        client_users::{
            MockClientUsersService,
            records::{ClientUserRecord, ClientUserUuid},
        },
        clients::{
            MockClientsService,
            records::{ClientRecord, ClientUuid},
        },
    },
};

use crate::{extensions::*, state::State};

/// Argon2 PHC string that no password verifies against.
const UNUSABLE_DIGEST: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1$dW51c2FibGU",
    "$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
);

/// One mock per service. Unconfigured mocks fail any call.
#[derive(Default)]
pub(crate) struct TestServices {
    pub auth: MockAuthService,
    pub administrators: MockAdministratorsService,
    pub client_requests: MockClientRequestsService,
    pub clients: MockClientsService,
    pub client_roles: MockClientRolesService,
    pub client_users: MockClientUsersService,
    pub management_role: Option<String>,
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                auth: Arc::new(self.auth),
                administrators: Arc::new(self.administrators),
                client_requests: Arc::new(self.client_requests),
                clients: Arc::new(self.clients),
                client_roles: Arc::new(self.client_roles),
                client_users: Arc::new(self.client_users),
            },
            self.management_role,
        )
    }

    /// Serve `route` as `actor`, or anonymously when `actor` is `None`.
    pub(crate) fn serve(self, actor: Option<AuthenticatedActor>, route: Router) -> Service {
        let router = Router::new().hoop(inject(self.into_state()));

        let router = match actor {
            Some(actor) => router.hoop(InjectActor(actor)),
            None => router,
        };

        Service::new(router.push(route))
    }
}

/// Stands in for the auth middleware.
#[derive(Debug, Clone)]
pub(crate) struct InjectActor(pub AuthenticatedActor);

#[salvo::handler]
impl InjectActor {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_actor(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn make_tokens() -> TokenPair {
    TokenPair {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_in: 900,
    }
}

pub(crate) fn make_administrator(username: &str) -> AdministratorRecord {
    AdministratorRecord {
        uuid: AdministratorUuid::new(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_digest: UNUSABLE_DIGEST.to_string().into(),
        first_name: "Test".to_string(),
        mid_name: None,
        last_name: "Administrator".to_string(),
        phone: None,
        designation: None,
        role_uuid: None,
        role_name: None,
        is_active: true,
        last_login_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client_request(
    company_email: &str,
    status: ClientRequestStatus,
) -> ClientRequestRecord {
    ClientRequestRecord {
        uuid: ClientRequestUuid::new(),
        company_name: "Acme".to_string(),
        company_email: company_email.to_string(),
        company_phone: "+44 20 7946 0000".to_string(),
        company_website: None,
        industry_type: "Manufacturing".to_string(),
        company_size: "11-50".to_string(),
        password_digest: UNUSABLE_DIGEST.to_string().into(),
        status,
        approved_by: None,
        approved_at: None,
        rejected_by: None,
        rejected_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client(company_email: &str) -> ClientRecord {
    ClientRecord {
        uuid: ClientUuid::new(),
        request_uuid: ClientRequestUuid::new(),
        company_name: "Acme".to_string(),
        company_email: company_email.to_string(),
        company_phone: "+44 20 7946 0000".to_string(),
        company_website: None,
        industry_type: "Manufacturing".to_string(),
        company_size: "11-50".to_string(),
        password_digest: UNUSABLE_DIGEST.to_string().into(),
        is_verified: true,
        is_active: true,
        last_login_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client_role(name: &str) -> ClientRoleRecord {
    ClientRoleRecord {
        uuid: ClientRoleUuid::new(),
        name: name.to_string(),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client_user(client: ClientUuid, email: &str) -> ClientUserRecord {
    ClientUserRecord {
        uuid: ClientUserUuid::new(),
        client_uuid: client,
        role_uuid: None,
        role_name: None,
        email: email.to_string(),
        password_digest: UNUSABLE_DIGEST.to_string().into(),
        full_name: "Staff Member".to_string(),
        phone: None,
        is_active: true,
        last_login_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
