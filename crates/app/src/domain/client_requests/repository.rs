//! Client Requests Repository

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    auth::password::PasswordDigest,
    database::RepositoryError,
    domain::{
        administrators::records::AdministratorUuid,
        client_requests::{
            data::NewClientRequest,
            records::{ClientRequestRecord, ClientRequestStatus, ClientRequestUuid},
        },
        clients::records::{ClientRecord, ClientUuid},
    },
};

const CREATE_CLIENT_REQUEST_SQL: &str = include_str!("sql/create_client_request.sql");
const LIST_CLIENT_REQUESTS_SQL: &str = include_str!("sql/list_client_requests.sql");
const GET_CLIENT_REQUEST_SQL: &str = include_str!("sql/get_client_request.sql");
const HAS_PENDING_CLIENT_REQUEST_SQL: &str = include_str!("sql/has_pending_client_request.sql");
const APPROVE_CLIENT_REQUEST_SQL: &str = include_str!("sql/approve_client_request.sql");
const REJECT_CLIENT_REQUEST_SQL: &str = include_str!("sql/reject_client_request.sql");
const MATERIALIZE_CLIENT_SQL: &str = include_str!("sql/materialize_client.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgClientRequestsRepository {
    pool: PgPool,
}

impl PgClientRequestsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRequestsRepository for PgClientRequestsRepository {
    async fn create_request(
        &self,
        request: ClientRequestUuid,
        data: &NewClientRequest,
        digest: &PasswordDigest,
    ) -> Result<ClientRequestRecord, RepositoryError> {
        Ok(
            query_as::<Postgres, ClientRequestRecord>(CREATE_CLIENT_REQUEST_SQL)
                .bind(request.into_uuid())
                .bind(&data.company_name)
                .bind(&data.company_email)
                .bind(&data.company_phone)
                .bind(data.company_website.as_deref())
                .bind(&data.industry_type)
                .bind(&data.company_size)
                .bind(digest.as_str())
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn list_requests(
        &self,
        status: Option<ClientRequestStatus>,
    ) -> Result<Vec<ClientRequestRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, ClientRequestRecord>(LIST_CLIENT_REQUESTS_SQL)
                .bind(status.map(ClientRequestStatus::as_str))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_request(
        &self,
        request: ClientRequestUuid,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, ClientRequestRecord>(GET_CLIENT_REQUEST_SQL)
                .bind(request.into_uuid())
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn has_pending_request(&self, company_email: &str) -> Result<bool, RepositoryError> {
        Ok(query_scalar::<Postgres, bool>(HAS_PENDING_CLIENT_REQUEST_SQL)
            .bind(company_email)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn approve_request(
        &self,
        request: ClientRequestUuid,
        approver: AdministratorUuid,
        approved_at: Timestamp,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, ClientRequestRecord>(APPROVE_CLIENT_REQUEST_SQL)
                .bind(request.into_uuid())
                .bind(approver.into_uuid())
                .bind(SqlxTimestamp::from(approved_at))
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn reject_request(
        &self,
        request: ClientRequestUuid,
        reviewer: AdministratorUuid,
        rejected_at: Timestamp,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, ClientRequestRecord>(REJECT_CLIENT_REQUEST_SQL)
                .bind(request.into_uuid())
                .bind(reviewer.into_uuid())
                .bind(SqlxTimestamp::from(rejected_at))
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn materialize_client(
        &self,
        request: ClientRequestUuid,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, RepositoryError> {
        Ok(query_as::<Postgres, ClientRecord>(MATERIALIZE_CLIENT_SQL)
            .bind(request.into_uuid())
            .bind(client.into_uuid())
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[automock]
#[async_trait]
pub(crate) trait ClientRequestsRepository: Send + Sync {
    async fn create_request(
        &self,
        request: ClientRequestUuid,
        data: &NewClientRequest,
        digest: &PasswordDigest,
    ) -> Result<ClientRequestRecord, RepositoryError>;

    async fn list_requests(
        &self,
        status: Option<ClientRequestStatus>,
    ) -> Result<Vec<ClientRequestRecord>, RepositoryError>;

    async fn get_request(
        &self,
        request: ClientRequestUuid,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError>;

    async fn has_pending_request(&self, company_email: &str) -> Result<bool, RepositoryError>;

    /// Approve a pending request. `None` when the request is not pending.
    async fn approve_request(
        &self,
        request: ClientRequestUuid,
        approver: AdministratorUuid,
        approved_at: Timestamp,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError>;

    /// Reject a pending request. `None` when the request is not pending.
    async fn reject_request(
        &self,
        request: ClientRequestUuid,
        reviewer: AdministratorUuid,
        rejected_at: Timestamp,
    ) -> Result<Option<ClientRequestRecord>, RepositoryError>;

    /// Copy an approved request into a new client. `None` when the request is not approved.
    async fn materialize_client(
        &self,
        request: ClientRequestUuid,
        client: ClientUuid,
    ) -> Result<Option<ClientRecord>, RepositoryError>;
}

impl<'r> FromRow<'r, PgRow> for ClientRequestRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<ClientRequestStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ClientRequestUuid::from_uuid(row.try_get("uuid")?),
            company_name: row.try_get("company_name")?,
            company_email: row.try_get("company_email")?,
            company_phone: row.try_get("company_phone")?,
            company_website: row.try_get("company_website")?,
            industry_type: row.try_get("industry_type")?,
            company_size: row.try_get("company_size")?,
            password_digest: PasswordDigest::from(row.try_get::<String, _>("password_hash")?),
            status,
            approved_by: row
                .try_get::<Option<Uuid>, _>("approved_by_administrator_uuid")?
                .map(AdministratorUuid::from_uuid),
            approved_at: row
                .try_get::<Option<SqlxTimestamp>, _>("approved_at")?
                .map(SqlxTimestamp::to_jiff),
            rejected_by: row
                .try_get::<Option<Uuid>, _>("rejected_by_administrator_uuid")?
                .map(AdministratorUuid::from_uuid),
            rejected_at: row
                .try_get::<Option<SqlxTimestamp>, _>("rejected_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
