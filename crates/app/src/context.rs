//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService, TokenIssuer, TokenSettings, token::TokenError},
    database,
    domain::{
        administrators::{AdministratorsService, PgAdministratorsService},
        client_requests::{ClientRequestsService, PgClientRequestsService},
        client_roles::{ClientRolesService, PgClientRolesService},
        client_users::{ClientUsersService, PgClientUsersService},
        clients::{ClientsService, PgClientsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("invalid token settings")]
    Token(#[source] TokenError),
}

/// Every service, built once at startup and shared by reference count.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub administrators: Arc<dyn AdministratorsService>,
    pub client_requests: Arc<dyn ClientRequestsService>,
    pub clients: Arc<dyn ClientsService>,
    pub client_roles: Arc<dyn ClientRolesService>,
    pub client_users: Arc<dyn ClientUsersService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the token settings are unusable or establishing a
    /// database connection fails.
    pub async fn from_database_url(
        url: &str,
        tokens: &TokenSettings,
    ) -> Result<Self, AppInitError> {
        let issuer = TokenIssuer::new(tokens).map_err(AppInitError::Token)?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool.clone(), issuer)),
            administrators: Arc::new(PgAdministratorsService::new(pool.clone())),
            client_requests: Arc::new(PgClientRequestsService::new(pool.clone())),
            clients: Arc::new(PgClientsService::new(pool.clone())),
            client_roles: Arc::new(PgClientRolesService::new(pool.clone())),
            client_users: Arc::new(PgClientUsersService::new(pool)),
        })
    }
}
