//! Client users service.
//!
//! Every operation takes the acting tenant, derived from the authenticated
//! actor, and never touches users outside it.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::password::{self, Password},
    domain::{
        client_users::{
            data::{ClientUserUpdate, NewClientUser},
            errors::ClientUsersServiceError,
            records::{ClientUserRecord, ClientUserUuid},
            repository::{ClientUsersRepository, PgClientUsersRepository},
        },
        clients::records::ClientUuid,
    },
    validation::{self, FieldErrors, normalize_email},
};

#[derive(Clone)]
pub struct PgClientUsersService {
    repository: Arc<dyn ClientUsersRepository>,
}

impl PgClientUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgClientUsersRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn ClientUsersRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for PgClientUsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgClientUsersService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ClientUsersService for PgClientUsersService {
    async fn list_users(
        &self,
        tenant: ClientUuid,
    ) -> Result<Vec<ClientUserRecord>, ClientUsersServiceError> {
        Ok(self.repository.list_users(tenant).await?)
    }

    async fn get_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<ClientUserRecord, ClientUsersServiceError> {
        self.repository
            .get_user(tenant, user)
            .await?
            .ok_or(ClientUsersServiceError::NotFound)
    }

    async fn create_user(
        &self,
        tenant: ClientUuid,
        mut user: NewClientUser,
    ) -> Result<ClientUserRecord, ClientUsersServiceError> {
        user.email = normalize_email(&user.email);
        user.full_name = user.full_name.trim().to_string();

        let mut errors = validation::validate(&user).err().unwrap_or_default();

        if let Err(password_errors) = user.password.check_length("password") {
            errors.extend(password_errors);
        }

        errors.into_result()?;

        let digest = password::hash_password(&user.password)?;

        let created = self
            .repository
            .create_user(tenant, ClientUserUuid::new(), &user, &digest)
            .await?
            .ok_or_else(inactive_role)?;

        info!(client_uuid = %tenant, client_user_uuid = %created.uuid, "created client user");

        Ok(created)
    }

    async fn update_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        mut update: ClientUserUpdate,
    ) -> Result<ClientUserRecord, ClientUsersServiceError> {
        update.email = update.email.as_deref().map(normalize_email);
        update.full_name = update.full_name.map(|name| name.trim().to_string());

        validation::validate(&update)?;

        if let Some(updated) = self.repository.update_user(tenant, user, &update).await? {
            return Ok(updated);
        }

        if update.role_uuid.is_some() && self.repository.get_user(tenant, user).await?.is_some() {
            return Err(inactive_role());
        }

        Err(ClientUsersServiceError::NotFound)
    }

    async fn toggle_status(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<ClientUserRecord, ClientUsersServiceError> {
        let updated = self
            .repository
            .toggle_user_status(tenant, user)
            .await?
            .ok_or(ClientUsersServiceError::NotFound)?;

        info!(
            client_uuid = %tenant,
            client_user_uuid = %user,
            is_active = updated.is_active,
            "toggled client user status"
        );

        Ok(updated)
    }

    async fn reset_password(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        new_password: Password,
    ) -> Result<(), ClientUsersServiceError> {
        new_password.check_length("password")?;

        let digest = password::hash_password(&new_password)?;

        if !self.repository.set_user_password(tenant, user, &digest).await? {
            return Err(ClientUsersServiceError::NotFound);
        }

        info!(client_uuid = %tenant, client_user_uuid = %user, "client user password reset");

        Ok(())
    }
}

fn inactive_role() -> ClientUsersServiceError {
    ClientUsersServiceError::Validation(FieldErrors::single("role_uuid", "inactive"))
}

#[automock]
#[async_trait]
pub trait ClientUsersService: Send + Sync {
    async fn list_users(
        &self,
        tenant: ClientUuid,
    ) -> Result<Vec<ClientUserRecord>, ClientUsersServiceError>;

    /// A user of another tenant is reported as not found.
    async fn get_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<ClientUserRecord, ClientUsersServiceError>;

    async fn create_user(
        &self,
        tenant: ClientUuid,
        user: NewClientUser,
    ) -> Result<ClientUserRecord, ClientUsersServiceError>;

    async fn update_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        update: ClientUserUpdate,
    ) -> Result<ClientUserRecord, ClientUsersServiceError>;

    async fn toggle_status(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<ClientUserRecord, ClientUsersServiceError>;

    /// Replace a user's password. Owner only; enforced by the caller's policy.
    async fn reset_password(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        new_password: Password,
    ) -> Result<(), ClientUsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        database::RepositoryError,
        domain::{
            client_roles::records::ClientRoleUuid,
            client_users::repository::MockClientUsersRepository,
        },
        errors::{ClassifiedError, ErrorKind},
        test::fixtures,
    };

    use super::*;

    fn service(repository: MockClientUsersRepository) -> PgClientUsersService {
        PgClientUsersService::with_repository(Arc::new(repository))
    }

    fn new_user() -> NewClientUser {
        NewClientUser {
            email: "Staff@X.com".to_string(),
            password: Password::new("staff password"),
            full_name: "Grace Hopper".to_string(),
            phone: None,
            role_uuid: None,
        }
    }

    #[tokio::test]
    async fn create_user_is_scoped_to_tenant() -> TestResult {
        let tenant = ClientUuid::new();

        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_create_user()
            .once()
            .withf(move |owner, _, data, digest| {
                *owner == tenant
                    && data.email == "staff@x.com"
                    && password::verify_password(&Password::new("staff password"), digest)
            })
            .returning(|owner, uuid, data, _| {
                let mut record = fixtures::client_user(owner, &data.email);

                record.uuid = uuid;

                Ok(Some(record))
            });

        let created = service(repository).create_user(tenant, new_user()).await?;

        assert_eq!(created.client_uuid, tenant);
        assert_eq!(created.email, "staff@x.com");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let mut repository = MockClientUsersRepository::new();

        repository.expect_create_user().once().return_once(|_, _, _, _| {
            Err(RepositoryError::AlreadyExists {
                constraint: Some("client_users_email_key".to_string()),
            })
        });

        let result = service(repository)
            .create_user(ClientUuid::new(), new_user())
            .await;

        assert!(
            result.as_ref().is_err_and(|error| error.kind() == ErrorKind::Conflict),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_role_is_a_validation_error() {
        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_create_user()
            .once()
            .return_once(|_, _, _, _| Err(RepositoryError::InvalidReference));

        let result = service(repository)
            .create_user(ClientUuid::new(), new_user())
            .await;

        assert!(
            result
                .as_ref()
                .err()
                .and_then(|error| error.fields())
                .is_some_and(|errors| errors.contains("role_uuid")),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn other_tenants_user_is_not_found() {
        let tenant_a = ClientUuid::new();
        let tenant_b = ClientUuid::new();
        let staff = fixtures::client_user(tenant_a, "staff@x.com");
        let staff_uuid = staff.uuid;

        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_get_user()
            .once()
            .withf(move |tenant, user| *tenant == tenant_b && *user == staff_uuid)
            .return_once(|_, _| Ok(None));

        let result = service(repository).get_user(tenant_b, staff_uuid).await;

        assert!(
            matches!(result, Err(ClientUsersServiceError::NotFound)),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn reset_password_rehashes() -> TestResult {
        let tenant = ClientUuid::new();
        let user = ClientUserUuid::new();

        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_set_user_password()
            .once()
            .withf(move |owner, target, digest| {
                *owner == tenant
                    && *target == user
                    && password::verify_password(&Password::new("replacement"), digest)
            })
            .return_once(|_, _, _| Ok(true));

        service(repository)
            .reset_password(tenant, user, Password::new("replacement"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn reset_password_rejects_short_password() {
        let mut repository = MockClientUsersRepository::new();

        repository.expect_set_user_password().never();

        let result = service(repository)
            .reset_password(ClientUuid::new(), ClientUserUuid::new(), Password::new("short"))
            .await;

        assert!(
            matches!(result, Err(ClientUsersServiceError::Validation(_))),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn toggling_foreign_user_is_not_found() {
        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_toggle_user_status()
            .once()
            .return_once(|_, _| Ok(None));

        let result = service(repository)
            .toggle_status(ClientUuid::new(), ClientUserUuid::new())
            .await;

        assert!(
            matches!(result, Err(ClientUsersServiceError::NotFound)),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn inactive_role_is_rejected_on_create() {
        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_create_user()
            .once()
            .return_once(|_, _, _, _| Ok(None));

        let result = service(repository)
            .create_user(
                ClientUuid::new(),
                NewClientUser {
                    role_uuid: Some(ClientRoleUuid::new()),
                    ..new_user()
                },
            )
            .await;

        assert!(
            result
                .as_ref()
                .err()
                .and_then(|error| error.fields())
                .is_some_and(|errors| errors.contains("role_uuid")),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn inactive_role_is_rejected_on_update() {
        let tenant = ClientUuid::new();
        let staff = fixtures::client_user(tenant, "staff@x.com");
        let staff_uuid = staff.uuid;

        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_update_user()
            .once()
            .return_once(|_, _, _| Ok(None));

        repository
            .expect_get_user()
            .once()
            .withf(move |owner, user| *owner == tenant && *user == staff_uuid)
            .return_once(move |_, _| Ok(Some(staff)));

        let result = service(repository)
            .update_user(
                tenant,
                staff_uuid,
                ClientUserUpdate {
                    role_uuid: Some(ClientRoleUuid::new()),
                    ..ClientUserUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(ClientUsersServiceError::Validation(ref errors)) if errors.contains("role_uuid")
            ),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn updating_missing_user_is_not_found() {
        let mut repository = MockClientUsersRepository::new();

        repository
            .expect_update_user()
            .once()
            .return_once(|_, _, _| Ok(None));

        repository.expect_get_user().never();

        let result = service(repository)
            .update_user(
                ClientUuid::new(),
                ClientUserUuid::new(),
                ClientUserUpdate {
                    full_name: Some("Ada Lovelace".to_string()),
                    ..ClientUserUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ClientUsersServiceError::NotFound)),
            "got {result:?}"
        );
    }
}
