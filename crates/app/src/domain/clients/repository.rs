//! Clients Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    auth::password::PasswordDigest,
    database::RepositoryError,
    domain::{
        client_requests::records::ClientRequestUuid,
        clients::{
            data::ClientProfileUpdate,
            records::{ClientRecord, ClientUuid},
        },
    },
};

const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");
const FIND_CLIENT_BY_EMAIL_SQL: &str = include_str!("sql/find_client_by_email.sql");
const UPDATE_CLIENT_SQL: &str = include_str!("sql/update_client.sql");
const TOGGLE_CLIENT_STATUS_SQL: &str = include_str!("sql/toggle_client_status.sql");
const TOUCH_CLIENT_LAST_LOGIN_SQL: &str = include_str!("sql/touch_client_last_login.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgClientsRepository {
    pool: PgPool,
}

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientsRepository for PgClientsRepository {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_client(
        &self,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(client.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_client_by_email(
        &self,
        company_email: &str,
    ) -> Result<Option<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(FIND_CLIENT_BY_EMAIL_SQL)
            .bind(company_email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_client(
        &self,
        client: ClientUuid,
        update: &ClientProfileUpdate,
    ) -> Result<Option<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(UPDATE_CLIENT_SQL)
            .bind(client.into_uuid())
            .bind(update.company_name.as_deref())
            .bind(update.company_phone.as_deref())
            .bind(update.company_website.as_deref())
            .bind(update.industry_type.as_deref())
            .bind(update.company_size.as_deref())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn toggle_client_status(
        &self,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(TOGGLE_CLIENT_STATUS_SQL)
            .bind(client.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn touch_client_last_login(&self, client: ClientUuid) -> Result<(), RepositoryError> {
        query(TOUCH_CLIENT_LAST_LOGIN_SQL)
            .bind(client.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub(crate) trait ClientsRepository: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, RepositoryError>;

    async fn get_client(&self, client: ClientUuid) -> Result<Option<ClientRecord>, RepositoryError>;

    /// Lookup by login identifier; the email is compared lower-cased.
    async fn find_client_by_email(
        &self,
        company_email: &str,
    ) -> Result<Option<ClientRecord>, RepositoryError>;

    async fn update_client(
        &self,
        client: ClientUuid,
        update: &ClientProfileUpdate,
    ) -> Result<Option<ClientRecord>, RepositoryError>;

    async fn toggle_client_status(
        &self,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, RepositoryError>;

    async fn touch_client_last_login(&self, client: ClientUuid) -> Result<(), RepositoryError>;
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ClientUuid::from_uuid(row.try_get("uuid")?),
            request_uuid: ClientRequestUuid::from_uuid(row.try_get("request_uuid")?),
            company_name: row.try_get("company_name")?,
            company_email: row.try_get("company_email")?,
            company_phone: row.try_get("company_phone")?,
            company_website: row.try_get("company_website")?,
            industry_type: row.try_get("industry_type")?,
            company_size: row.try_get("company_size")?,
            password_digest: PasswordDigest::from(row.try_get::<String, _>("password_hash")?),
            is_verified: row.try_get("is_verified")?,
            is_active: row.try_get("is_active")?,
            last_login_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_login_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
