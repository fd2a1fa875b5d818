//! Clients service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    domain::clients::{
        data::ClientProfileUpdate,
        errors::ClientsServiceError,
        records::{ClientRecord, ClientUuid},
        repository::{ClientsRepository, PgClientsRepository},
    },
    validation,
};

#[derive(Clone)]
pub struct PgClientsService {
    repository: Arc<dyn ClientsRepository>,
}

impl PgClientsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgClientsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn ClientsRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for PgClientsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgClientsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn get_profile(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError> {
        self.repository
            .get_client(client)
            .await?
            .ok_or(ClientsServiceError::NotFound)
    }

    async fn update_profile(
        &self,
        client: ClientUuid,
        mut update: ClientProfileUpdate,
    ) -> Result<ClientRecord, ClientsServiceError> {
        update.company_name = update.company_name.map(|name| name.trim().to_string());

        validation::validate(&update)?;

        self.repository
            .update_client(client, &update)
            .await?
            .ok_or(ClientsServiceError::NotFound)
    }

    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError> {
        Ok(self.repository.list_clients().await?)
    }

    async fn toggle_status(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError> {
        let updated = self
            .repository
            .toggle_client_status(client)
            .await?
            .ok_or(ClientsServiceError::NotFound)?;

        info!(client_uuid = %client, is_active = updated.is_active, "toggled client status");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// The acting tenant's own profile.
    async fn get_profile(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError>;

    async fn update_profile(
        &self,
        client: ClientUuid,
        update: ClientProfileUpdate,
    ) -> Result<ClientRecord, ClientsServiceError>;

    /// Every client, newest first. Administrator use only.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError>;

    /// Flip the active flag. A deactivated client can no longer log in.
    async fn toggle_status(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError>;
}
