//! Client roles service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    domain::client_roles::{
        data::{ClientRoleUpdate, NewClientRole},
        errors::ClientRolesServiceError,
        records::{ClientRoleRecord, ClientRoleUuid},
        repository::{ClientRolesRepository, PgClientRolesRepository},
    },
    validation,
};

#[derive(Clone)]
pub struct PgClientRolesService {
    repository: Arc<dyn ClientRolesRepository>,
}

impl PgClientRolesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgClientRolesRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn ClientRolesRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for PgClientRolesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgClientRolesService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ClientRolesService for PgClientRolesService {
    async fn list_roles(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<ClientRoleRecord>, ClientRolesServiceError> {
        Ok(self.repository.list_roles(include_inactive).await?)
    }

    async fn get_role(
        &self,
        role: ClientRoleUuid,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError> {
        self.repository
            .get_role(role)
            .await?
            .ok_or(ClientRolesServiceError::NotFound)
    }

    async fn create_role(
        &self,
        mut role: NewClientRole,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError> {
        role.name = role.name.trim().to_string();

        validation::validate(&role)?;

        let created = self
            .repository
            .create_role(ClientRoleUuid::new(), &role)
            .await?;

        info!(client_role_uuid = %created.uuid, name = %created.name, "created client role");

        Ok(created)
    }

    async fn update_role(
        &self,
        role: ClientRoleUuid,
        mut update: ClientRoleUpdate,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError> {
        update.name = update.name.map(|name| name.trim().to_string());

        validation::validate(&update)?;

        let updated = self
            .repository
            .update_role(role, &update)
            .await?
            .ok_or(ClientRolesServiceError::NotFound)?;

        info!(client_role_uuid = %role, name = %updated.name, "updated client role");

        Ok(updated)
    }

    async fn toggle_status(
        &self,
        role: ClientRoleUuid,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError> {
        let toggled = self
            .repository
            .toggle_role_status(role)
            .await?
            .ok_or(ClientRolesServiceError::NotFound)?;

        info!(
            client_role_uuid = %role,
            is_active = toggled.is_active,
            "toggled client role status"
        );

        Ok(toggled)
    }
}

#[automock]
#[async_trait]
pub trait ClientRolesService: Send + Sync {
    /// Inactive roles are left out unless `include_inactive` is set.
    async fn list_roles(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<ClientRoleRecord>, ClientRolesServiceError>;

    async fn get_role(
        &self,
        role: ClientRoleUuid,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError>;

    async fn create_role(
        &self,
        role: NewClientRole,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError>;

    async fn update_role(
        &self,
        role: ClientRoleUuid,
        update: ClientRoleUpdate,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError>;

    /// Flip `is_active`. An inactive role can no longer be assigned to users.
    async fn toggle_status(
        &self,
        role: ClientRoleUuid,
    ) -> Result<ClientRoleRecord, ClientRolesServiceError>;
}
