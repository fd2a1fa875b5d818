//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::{
    auth::{
        AuthServiceError,
        actor::{ActorKind, AuthenticatedActor},
        password::{self, Password, PasswordDigest},
        token::{Claims, TokenIssuer, TokenPair, TokenType},
    },
    domain::{
        administrators::{
            records::{AdministratorRecord, AdministratorUuid},
            repository::{AdministratorsRepository, PgAdministratorsRepository},
        },
        client_users::{
            records::{ClientUserRecord, ClientUserUuid},
            repository::{ClientUsersRepository, PgClientUsersRepository},
        },
        clients::{
            records::{ClientRecord, ClientUuid},
            repository::{ClientsRepository, PgClientsRepository},
        },
    },
    validation::normalize_email,
};

/// A successful login: the authenticated record and its fresh tokens.
#[derive(Debug, Clone)]
pub struct Login<R> {
    pub record: R,
    pub tokens: TokenPair,
}

#[derive(Clone)]
pub struct PgAuthService {
    administrators: Arc<dyn AdministratorsRepository>,
    clients: Arc<dyn ClientsRepository>,
    client_users: Arc<dyn ClientUsersRepository>,
    issuer: TokenIssuer,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, issuer: TokenIssuer) -> Self {
        Self::with_repositories(
            Arc::new(PgAdministratorsRepository::new(pool.clone())),
            Arc::new(PgClientsRepository::new(pool.clone())),
            Arc::new(PgClientUsersRepository::new(pool)),
            issuer,
        )
    }

    #[must_use]
    pub(crate) fn with_repositories(
        administrators: Arc<dyn AdministratorsRepository>,
        clients: Arc<dyn ClientsRepository>,
        client_users: Arc<dyn ClientUsersRepository>,
        issuer: TokenIssuer,
    ) -> Self {
        Self {
            administrators,
            clients,
            client_users,
            issuer,
        }
    }

    /// Re-read the token subject and require it to be active.
    async fn resolve(&self, claims: &Claims) -> Result<AuthenticatedActor, AuthServiceError> {
        let actor = match claims.kind {
            ActorKind::Administrator => self
                .administrators
                .get_administrator(AdministratorUuid::from_uuid(claims.sub))
                .await?
                .map(|record| AuthenticatedActor::from(&record)),
            ActorKind::Client => self
                .clients
                .get_client(ClientUuid::from_uuid(claims.sub))
                .await?
                .map(|record| AuthenticatedActor::from(&record)),
            ActorKind::ClientUser => {
                let user = self
                    .client_users
                    .get_client_user_by_uuid(ClientUserUuid::from_uuid(claims.sub))
                    .await?;

                if let Some(user) = &user
                    && !self.owner_is_active(user).await?
                {
                    return Err(AuthServiceError::ActorInactive);
                }

                user.map(|record| AuthenticatedActor::from(&record))
            }
        };

        let actor = actor.ok_or(AuthServiceError::ActorNotFound)?;

        if !actor.is_active() {
            return Err(AuthServiceError::ActorInactive);
        }

        Ok(actor)
    }

    /// Staff of a deactivated client are locked out with it.
    async fn owner_is_active(&self, user: &ClientUserRecord) -> Result<bool, AuthServiceError> {
        Ok(self
            .clients
            .get_client(user.client_uuid)
            .await?
            .is_some_and(|client| client.is_active))
    }

    /// Verify a password against at most one candidate record.
    ///
    /// The dummy verification keeps the unknown-identifier path as slow as the
    /// wrong-password path.
    fn check_password<R>(
        candidate: Option<R>,
        password: &Password,
        digest: impl Fn(&R) -> &PasswordDigest,
    ) -> Result<R, AuthServiceError> {
        let Some(record) = candidate else {
            password::verify_dummy(password);

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !password::verify_password(password, digest(&record)) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(record)
    }
}

impl std::fmt::Debug for PgAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAuthService")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login_administrator(
        &self,
        identifier: &str,
        password: Password,
    ) -> Result<Login<AdministratorRecord>, AuthServiceError> {
        let mut matches = self
            .administrators
            .find_administrators_by_identifier(identifier.trim())
            .await?;

        // A username equal to another administrator's email is ambiguous.
        let candidate = if matches.len() == 1 { matches.pop() } else { None };

        let record = Self::check_password(candidate, &password, |record| &record.password_digest)?;

        if !record.is_active {
            return Err(AuthServiceError::AccountInactive);
        }

        let tokens = self
            .issuer
            .issue_pair(record.uuid.into_uuid(), ActorKind::Administrator)?;

        if let Err(error) = self
            .administrators
            .touch_administrator_last_login(record.uuid)
            .await
        {
            warn!(administrator_uuid = %record.uuid, "failed to record last login: {error}");
        }

        debug!(administrator_uuid = %record.uuid, "administrator logged in");

        Ok(Login { record, tokens })
    }

    async fn login_client(
        &self,
        company_email: &str,
        password: Password,
    ) -> Result<Login<ClientRecord>, AuthServiceError> {
        let candidate = self
            .clients
            .find_client_by_email(&normalize_email(company_email))
            .await?;

        let record = Self::check_password(candidate, &password, |record| &record.password_digest)?;

        if !record.is_active {
            return Err(AuthServiceError::AccountInactive);
        }

        let tokens = self
            .issuer
            .issue_pair(record.uuid.into_uuid(), ActorKind::Client)?;

        if let Err(error) = self.clients.touch_client_last_login(record.uuid).await {
            warn!(client_uuid = %record.uuid, "failed to record last login: {error}");
        }

        debug!(client_uuid = %record.uuid, "client logged in");

        Ok(Login { record, tokens })
    }

    async fn login_client_user(
        &self,
        email: &str,
        password: Password,
    ) -> Result<Login<ClientUserRecord>, AuthServiceError> {
        let candidate = self
            .client_users
            .find_client_user_by_email(&normalize_email(email))
            .await?;

        let record = Self::check_password(candidate, &password, |record| &record.password_digest)?;

        if !record.is_active || !self.owner_is_active(&record).await? {
            return Err(AuthServiceError::AccountInactive);
        }

        let tokens = self
            .issuer
            .issue_pair(record.uuid.into_uuid(), ActorKind::ClientUser)?;

        if let Err(error) = self
            .client_users
            .touch_client_user_last_login(record.uuid)
            .await
        {
            warn!(client_user_uuid = %record.uuid, "failed to record last login: {error}");
        }

        debug!(client_user_uuid = %record.uuid, "client user logged in");

        Ok(Login { record, tokens })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthServiceError> {
        let claims = self.issuer.decode(refresh_token, TokenType::Refresh)?;
        let actor = self.resolve(&claims).await?;

        Ok(self.issuer.issue_pair(actor.subject(), actor.kind())?)
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedActor, AuthServiceError> {
        let claims = self.issuer.decode(bearer_token, TokenType::Access)?;

        self.resolve(&claims).await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Log in with a username or email.
    async fn login_administrator(
        &self,
        identifier: &str,
        password: Password,
    ) -> Result<Login<AdministratorRecord>, AuthServiceError>;

    async fn login_client(
        &self,
        company_email: &str,
        password: Password,
    ) -> Result<Login<ClientRecord>, AuthServiceError>;

    async fn login_client_user(
        &self,
        email: &str,
        password: Password,
    ) -> Result<Login<ClientUserRecord>, AuthServiceError>;

    /// Exchange a refresh token for a new pair, re-checking the subject.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthServiceError>;

    /// Validate an access token and resolve the actor behind it.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedActor, AuthServiceError>;
}
