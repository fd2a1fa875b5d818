//! Client Users Repository
//!
//! Every tenant-facing statement filters on `client_uuid`. The unscoped
//! lookups at the bottom of the trait exist for login and token resolution.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::password::PasswordDigest,
    database::RepositoryError,
    domain::{
        client_roles::records::ClientRoleUuid,
        client_users::{
            data::{ClientUserUpdate, NewClientUser},
            records::{ClientUserRecord, ClientUserUuid},
        },
        clients::records::ClientUuid,
    },
};

const LIST_CLIENT_USERS_SQL: &str = include_str!("sql/list_client_users.sql");
const GET_CLIENT_USER_SQL: &str = include_str!("sql/get_client_user.sql");
const CREATE_CLIENT_USER_SQL: &str = include_str!("sql/create_client_user.sql");
const UPDATE_CLIENT_USER_SQL: &str = include_str!("sql/update_client_user.sql");
const TOGGLE_CLIENT_USER_STATUS_SQL: &str = include_str!("sql/toggle_client_user_status.sql");
const SET_CLIENT_USER_PASSWORD_SQL: &str = include_str!("sql/set_client_user_password.sql");
const FIND_CLIENT_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_client_user_by_email.sql");
const GET_CLIENT_USER_BY_UUID_SQL: &str = include_str!("sql/get_client_user_by_uuid.sql");
const TOUCH_CLIENT_USER_LAST_LOGIN_SQL: &str =
    include_str!("sql/touch_client_user_last_login.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgClientUsersRepository {
    pool: PgPool,
}

impl PgClientUsersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientUsersRepository for PgClientUsersRepository {
    async fn list_users(
        &self,
        tenant: ClientUuid,
    ) -> Result<Vec<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(LIST_CLIENT_USERS_SQL)
            .bind(tenant.into_uuid())
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(GET_CLIENT_USER_SQL)
            .bind(tenant.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        data: &NewClientUser,
        digest: &PasswordDigest,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(CREATE_CLIENT_USER_SQL)
            .bind(tenant.into_uuid())
            .bind(user.into_uuid())
            .bind(data.role_uuid.map(ClientRoleUuid::into_uuid))
            .bind(&data.email)
            .bind(digest.as_str())
            .bind(&data.full_name)
            .bind(data.phone.as_deref())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        update: &ClientUserUpdate,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(UPDATE_CLIENT_USER_SQL)
            .bind(tenant.into_uuid())
            .bind(user.into_uuid())
            .bind(update.email.as_deref())
            .bind(update.full_name.as_deref())
            .bind(update.phone.as_deref())
            .bind(update.role_uuid.map(ClientRoleUuid::into_uuid))
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn toggle_user_status(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(TOGGLE_CLIENT_USER_STATUS_SQL)
            .bind(tenant.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn set_user_password(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        digest: &PasswordDigest,
    ) -> Result<bool, RepositoryError> {
        let rows_affected = query(SET_CLIENT_USER_PASSWORD_SQL)
            .bind(tenant.into_uuid())
            .bind(user.into_uuid())
            .bind(digest.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn find_client_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(FIND_CLIENT_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn get_client_user_by_uuid(
        &self,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientUserRecord>(GET_CLIENT_USER_BY_UUID_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn touch_client_user_last_login(
        &self,
        user: ClientUserUuid,
    ) -> Result<(), RepositoryError> {
        query(TOUCH_CLIENT_USER_LAST_LOGIN_SQL)
            .bind(user.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub(crate) trait ClientUsersRepository: Send + Sync {
    async fn list_users(
        &self,
        tenant: ClientUuid,
    ) -> Result<Vec<ClientUserRecord>, RepositoryError>;

    async fn get_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    /// `None` when the requested role is inactive.
    async fn create_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        data: &NewClientUser,
        digest: &PasswordDigest,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    /// `None` when the user is missing, belongs to another tenant, or the
    /// requested role is inactive.
    async fn update_user(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        update: &ClientUserUpdate,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    async fn toggle_user_status(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    async fn set_user_password(
        &self,
        tenant: ClientUuid,
        user: ClientUserUuid,
        digest: &PasswordDigest,
    ) -> Result<bool, RepositoryError>;

    async fn find_client_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    async fn get_client_user_by_uuid(
        &self,
        user: ClientUserUuid,
    ) -> Result<Option<ClientUserRecord>, RepositoryError>;

    async fn touch_client_user_last_login(
        &self,
        user: ClientUserUuid,
    ) -> Result<(), RepositoryError>;
}

impl<'r> FromRow<'r, PgRow> for ClientUserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ClientUserUuid::from_uuid(row.try_get("uuid")?),
            client_uuid: ClientUuid::from_uuid(row.try_get("client_uuid")?),
            role_uuid: row
                .try_get::<Option<Uuid>, _>("role_uuid")?
                .map(ClientRoleUuid::from_uuid),
            role_name: row.try_get("role_name")?,
            email: row.try_get("email")?,
            password_digest: PasswordDigest::from(row.try_get::<String, _>("password_hash")?),
            full_name: row.try_get("full_name")?,
            phone: row.try_get("phone")?,
            is_active: row.try_get("is_active")?,
            last_login_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_login_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
