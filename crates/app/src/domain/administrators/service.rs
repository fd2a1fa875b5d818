//! Administrators service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::password,
    domain::administrators::{
        data::{AdministratorUpdate, NewAdministrator, NewAdministratorRole, PasswordChange},
        errors::AdministratorsServiceError,
        records::{
            AdministratorRecord, AdministratorRoleRecord, AdministratorRoleUuid,
            AdministratorUuid, DashboardStats,
        },
        repository::{AdministratorsRepository, PgAdministratorsRepository},
    },
    validation::{self, FieldErrors, normalize_email},
};

#[derive(Clone)]
pub struct PgAdministratorsService {
    repository: Arc<dyn AdministratorsRepository>,
}

impl PgAdministratorsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgAdministratorsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn AdministratorsRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for PgAdministratorsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAdministratorsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl AdministratorsService for PgAdministratorsService {
    async fn list_administrators(
        &self,
    ) -> Result<Vec<AdministratorRecord>, AdministratorsServiceError> {
        Ok(self.repository.list_administrators().await?)
    }

    async fn get_administrator(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<AdministratorRecord, AdministratorsServiceError> {
        self.repository
            .get_administrator(administrator)
            .await?
            .ok_or(AdministratorsServiceError::NotFound)
    }

    async fn create_administrator(
        &self,
        mut administrator: NewAdministrator,
    ) -> Result<AdministratorRecord, AdministratorsServiceError> {
        administrator.username = administrator.username.trim().to_string();
        administrator.email = normalize_email(&administrator.email);

        let mut errors = validation::validate(&administrator).err().unwrap_or_default();

        if let Err(password_errors) = administrator.password.check_length("password") {
            errors.extend(password_errors);
        }

        errors.into_result()?;

        let digest = password::hash_password(&administrator.password)?;

        let created = self
            .repository
            .create_administrator(AdministratorUuid::new(), &administrator, &digest)
            .await?;

        info!(
            administrator_uuid = %created.uuid,
            username = %created.username,
            "created administrator"
        );

        Ok(created)
    }

    async fn update_profile(
        &self,
        administrator: AdministratorUuid,
        mut update: AdministratorUpdate,
    ) -> Result<AdministratorRecord, AdministratorsServiceError> {
        update.email = update.email.as_deref().map(normalize_email);

        validation::validate(&update)?;

        let updated = self
            .repository
            .update_administrator(administrator, &update)
            .await?
            .ok_or(AdministratorsServiceError::NotFound)?;

        info!(administrator_uuid = %administrator, "updated administrator profile");

        Ok(updated)
    }

    async fn change_password(
        &self,
        administrator: AdministratorUuid,
        change: PasswordChange,
    ) -> Result<(), AdministratorsServiceError> {
        let current = self.get_administrator(administrator).await?;

        let mut errors = FieldErrors::default();

        if !password::verify_password(&change.old_password, &current.password_digest) {
            errors.push("old_password", "incorrect");
        }

        if let Err(length_errors) = change.new_password.check_length("new_password") {
            errors.extend(length_errors);
        }

        if change.new_password != change.confirm_password {
            errors.push("confirm_password", "mismatch");
        }

        errors.into_result()?;

        let digest = password::hash_password(&change.new_password)?;

        if !self
            .repository
            .set_administrator_password(administrator, &digest)
            .await?
        {
            return Err(AdministratorsServiceError::NotFound);
        }

        info!(administrator_uuid = %administrator, "administrator changed password");

        Ok(())
    }

    async fn toggle_status(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<AdministratorRecord, AdministratorsServiceError> {
        let updated = self
            .repository
            .toggle_administrator_status(administrator)
            .await?
            .ok_or(AdministratorsServiceError::NotFound)?;

        info!(
            administrator_uuid = %administrator,
            is_active = updated.is_active,
            "toggled administrator status"
        );

        Ok(updated)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, AdministratorsServiceError> {
        Ok(self.repository.dashboard_stats().await?)
    }

    async fn list_roles(&self) -> Result<Vec<AdministratorRoleRecord>, AdministratorsServiceError> {
        Ok(self.repository.list_roles().await?)
    }

    async fn create_role(
        &self,
        mut role: NewAdministratorRole,
    ) -> Result<AdministratorRoleRecord, AdministratorsServiceError> {
        role.name = role.name.trim().to_string();

        validation::validate(&role)?;

        Ok(self
            .repository
            .create_role(AdministratorRoleUuid::new(), &role)
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait AdministratorsService: Send + Sync {
    /// All administrators, newest first.
    async fn list_administrators(
        &self,
    ) -> Result<Vec<AdministratorRecord>, AdministratorsServiceError>;

    async fn get_administrator(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<AdministratorRecord, AdministratorsServiceError>;

    /// Validates, hashes the password and stores a new administrator.
    async fn create_administrator(
        &self,
        administrator: NewAdministrator,
    ) -> Result<AdministratorRecord, AdministratorsServiceError>;

    async fn update_profile(
        &self,
        administrator: AdministratorUuid,
        update: AdministratorUpdate,
    ) -> Result<AdministratorRecord, AdministratorsServiceError>;

    /// Requires the current password; the new one must be confirmed.
    async fn change_password(
        &self,
        administrator: AdministratorUuid,
        change: PasswordChange,
    ) -> Result<(), AdministratorsServiceError>;

    /// Flip the active flag. Deactivated administrators can no longer log in
    /// and their outstanding tokens stop validating.
    async fn toggle_status(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<AdministratorRecord, AdministratorsServiceError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, AdministratorsServiceError>;

    async fn list_roles(&self) -> Result<Vec<AdministratorRoleRecord>, AdministratorsServiceError>;

    async fn create_role(
        &self,
        role: NewAdministratorRole,
    ) -> Result<AdministratorRoleRecord, AdministratorsServiceError>;
}

/// Resolve a role name to its identifier.
///
/// # Errors
///
/// Returns a validation error naming `role` when no role has that name.
pub async fn resolve_role(
    service: &dyn AdministratorsService,
    name: &str,
) -> Result<AdministratorRoleUuid, AdministratorsServiceError> {
    service
        .list_roles()
        .await?
        .into_iter()
        .find(|role| role.name == name)
        .map(|role| role.uuid)
        .ok_or_else(|| {
            AdministratorsServiceError::Validation(FieldErrors::single("role", "unknown"))
        })
}
