//! Administrators Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::password::PasswordDigest,
    database::RepositoryError,
    domain::administrators::{
        data::{AdministratorUpdate, NewAdministrator, NewAdministratorRole},
        records::{
            AdministratorRecord, AdministratorRoleRecord, AdministratorRoleUuid,
            AdministratorUuid, DashboardStats,
        },
    },
};

const LIST_ADMINISTRATORS_SQL: &str = include_str!("sql/list_administrators.sql");
const GET_ADMINISTRATOR_SQL: &str = include_str!("sql/get_administrator.sql");
const FIND_ADMINISTRATORS_BY_IDENTIFIER_SQL: &str =
    include_str!("sql/find_administrators_by_identifier.sql");
const CREATE_ADMINISTRATOR_SQL: &str = include_str!("sql/create_administrator.sql");
const UPDATE_ADMINISTRATOR_SQL: &str = include_str!("sql/update_administrator.sql");
const TOGGLE_ADMINISTRATOR_STATUS_SQL: &str = include_str!("sql/toggle_administrator_status.sql");
const SET_ADMINISTRATOR_PASSWORD_SQL: &str = include_str!("sql/set_administrator_password.sql");
const TOUCH_ADMINISTRATOR_LAST_LOGIN_SQL: &str =
    include_str!("sql/touch_administrator_last_login.sql");
const DASHBOARD_STATS_SQL: &str = include_str!("sql/dashboard_stats.sql");
const LIST_ADMINISTRATOR_ROLES_SQL: &str = include_str!("sql/list_administrator_roles.sql");
const CREATE_ADMINISTRATOR_ROLE_SQL: &str = include_str!("sql/create_administrator_role.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAdministratorsRepository {
    pool: PgPool,
}

impl PgAdministratorsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdministratorsRepository for PgAdministratorsRepository {
    async fn list_administrators(&self) -> Result<Vec<AdministratorRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(LIST_ADMINISTRATORS_SQL)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_administrator(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<Option<AdministratorRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(GET_ADMINISTRATOR_SQL)
                .bind(administrator.into_uuid())
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_administrators_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Vec<AdministratorRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(FIND_ADMINISTRATORS_BY_IDENTIFIER_SQL)
                .bind(identifier)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_administrator(
        &self,
        administrator: AdministratorUuid,
        data: &NewAdministrator,
        digest: &PasswordDigest,
    ) -> Result<AdministratorRecord, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(CREATE_ADMINISTRATOR_SQL)
                .bind(administrator.into_uuid())
                .bind(&data.username)
                .bind(&data.email)
                .bind(digest.as_str())
                .bind(&data.first_name)
                .bind(data.mid_name.as_deref())
                .bind(&data.last_name)
                .bind(data.phone.as_deref())
                .bind(data.designation.as_deref())
                .bind(data.role_uuid.map(AdministratorRoleUuid::into_uuid))
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn update_administrator(
        &self,
        administrator: AdministratorUuid,
        update: &AdministratorUpdate,
    ) -> Result<Option<AdministratorRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(UPDATE_ADMINISTRATOR_SQL)
                .bind(administrator.into_uuid())
                .bind(update.email.as_deref())
                .bind(update.first_name.as_deref())
                .bind(update.mid_name.as_deref())
                .bind(update.last_name.as_deref())
                .bind(update.phone.as_deref())
                .bind(update.designation.as_deref())
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn toggle_administrator_status(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<Option<AdministratorRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRecord>(TOGGLE_ADMINISTRATOR_STATUS_SQL)
                .bind(administrator.into_uuid())
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn set_administrator_password(
        &self,
        administrator: AdministratorUuid,
        digest: &PasswordDigest,
    ) -> Result<bool, RepositoryError> {
        let rows_affected = query(SET_ADMINISTRATOR_PASSWORD_SQL)
            .bind(administrator.into_uuid())
            .bind(digest.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn touch_administrator_last_login(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<(), RepositoryError> {
        query(TOUCH_ADMINISTRATOR_LAST_LOGIN_SQL)
            .bind(administrator.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepositoryError> {
        let row = query(DASHBOARD_STATS_SQL).fetch_one(&self.pool).await?;

        Ok(DashboardStats {
            total_administrators: row.try_get("total_administrators")?,
            active_administrators: row.try_get("active_administrators")?,
            pending_client_requests: row.try_get("pending_client_requests")?,
            approved_client_requests: row.try_get("approved_client_requests")?,
            rejected_client_requests: row.try_get("rejected_client_requests")?,
            total_clients: row.try_get("total_clients")?,
            active_clients: row.try_get("active_clients")?,
        })
    }

    async fn list_roles(&self) -> Result<Vec<AdministratorRoleRecord>, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRoleRecord>(LIST_ADMINISTRATOR_ROLES_SQL)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_role(
        &self,
        role: AdministratorRoleUuid,
        data: &NewAdministratorRole,
    ) -> Result<AdministratorRoleRecord, RepositoryError> {
        Ok(
            query_as::<Postgres, AdministratorRoleRecord>(CREATE_ADMINISTRATOR_ROLE_SQL)
                .bind(role.into_uuid())
                .bind(&data.name)
                .fetch_one(&self.pool)
                .await?,
        )
    }
}

#[automock]
#[async_trait]
pub(crate) trait AdministratorsRepository: Send + Sync {
    async fn list_administrators(&self) -> Result<Vec<AdministratorRecord>, RepositoryError>;

    async fn get_administrator(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<Option<AdministratorRecord>, RepositoryError>;

    /// Administrators whose username, or email, equals the identifier.
    async fn find_administrators_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Vec<AdministratorRecord>, RepositoryError>;

    async fn create_administrator(
        &self,
        administrator: AdministratorUuid,
        data: &NewAdministrator,
        digest: &PasswordDigest,
    ) -> Result<AdministratorRecord, RepositoryError>;

    async fn update_administrator(
        &self,
        administrator: AdministratorUuid,
        update: &AdministratorUpdate,
    ) -> Result<Option<AdministratorRecord>, RepositoryError>;

    async fn toggle_administrator_status(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<Option<AdministratorRecord>, RepositoryError>;

    async fn set_administrator_password(
        &self,
        administrator: AdministratorUuid,
        digest: &PasswordDigest,
    ) -> Result<bool, RepositoryError>;

    async fn touch_administrator_last_login(
        &self,
        administrator: AdministratorUuid,
    ) -> Result<(), RepositoryError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepositoryError>;

    async fn list_roles(&self) -> Result<Vec<AdministratorRoleRecord>, RepositoryError>;

    async fn create_role(
        &self,
        role: AdministratorRoleUuid,
        data: &NewAdministratorRole,
    ) -> Result<AdministratorRoleRecord, RepositoryError>;
}

impl<'r> FromRow<'r, PgRow> for AdministratorRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdministratorUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password_digest: PasswordDigest::from(row.try_get::<String, _>("password_hash")?),
            first_name: row.try_get("first_name")?,
            mid_name: row.try_get("mid_name")?,
            last_name: row.try_get("last_name")?,
            phone: row.try_get("phone")?,
            designation: row.try_get("designation")?,
            role_uuid: row
                .try_get::<Option<Uuid>, _>("role_uuid")?
                .map(AdministratorRoleUuid::from_uuid),
            role_name: row.try_get("role_name")?,
            is_active: row.try_get("is_active")?,
            last_login_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_login_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AdministratorRoleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdministratorRoleUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
