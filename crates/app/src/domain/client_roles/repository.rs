//! Client Roles Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::RepositoryError,
    domain::client_roles::{
        data::{ClientRoleUpdate, NewClientRole},
        records::{ClientRoleRecord, ClientRoleUuid},
    },
};

const LIST_CLIENT_ROLES_SQL: &str = include_str!("sql/list_client_roles.sql");
const GET_CLIENT_ROLE_SQL: &str = include_str!("sql/get_client_role.sql");
const CREATE_CLIENT_ROLE_SQL: &str = include_str!("sql/create_client_role.sql");
const UPDATE_CLIENT_ROLE_SQL: &str = include_str!("sql/update_client_role.sql");
const TOGGLE_CLIENT_ROLE_STATUS_SQL: &str = include_str!("sql/toggle_client_role_status.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgClientRolesRepository {
    pool: PgPool,
}

impl PgClientRolesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRolesRepository for PgClientRolesRepository {
    async fn list_roles(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<ClientRoleRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRoleRecord>(LIST_CLIENT_ROLES_SQL)
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_role(
        &self,
        role: ClientRoleUuid,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRoleRecord>(GET_CLIENT_ROLE_SQL)
            .bind(role.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_role(
        &self,
        role: ClientRoleUuid,
        data: &NewClientRole,
    ) -> Result<ClientRoleRecord, RepositoryError> {
        Ok(query_as::<Postgres, ClientRoleRecord>(CREATE_CLIENT_ROLE_SQL)
            .bind(role.into_uuid())
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_role(
        &self,
        role: ClientRoleUuid,
        update: &ClientRoleUpdate,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRoleRecord>(UPDATE_CLIENT_ROLE_SQL)
            .bind(role.into_uuid())
            .bind(update.name.as_deref())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn toggle_role_status(
        &self,
        role: ClientRoleUuid,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRoleRecord>(TOGGLE_CLIENT_ROLE_STATUS_SQL)
            .bind(role.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[automock]
#[async_trait]
pub(crate) trait ClientRolesRepository: Send + Sync {
    async fn list_roles(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<ClientRoleRecord>, RepositoryError>;

    async fn get_role(
        &self,
        role: ClientRoleUuid,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError>;

    async fn create_role(
        &self,
        role: ClientRoleUuid,
        data: &NewClientRole,
    ) -> Result<ClientRoleRecord, RepositoryError>;

    async fn update_role(
        &self,
        role: ClientRoleUuid,
        update: &ClientRoleUpdate,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError>;

    async fn toggle_role_status(
        &self,
        role: ClientRoleUuid,
    ) -> Result<Option<ClientRoleRecord>, RepositoryError>;
}

impl<'r> FromRow<'r, PgRow> for ClientRoleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ClientRoleUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
