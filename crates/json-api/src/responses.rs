//! Response bodies shared by several endpoints.
//!
//! Password digests never leave the application layer, so none of these
//! carry one.

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenantry_app::{
    auth::TokenPair,
    domain::{
        administrators::records::{AdministratorRecord, DashboardStats},
        client_requests::records::ClientRequestRecord,
        client_roles::records::ClientRoleRecord,
        client_users::records::ClientUserRecord,
        clients::records::ClientRecord,
    },
};

/// Access and refresh tokens.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,

    /// Always `Bearer`
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdministratorResponse {
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub mid_name: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub role_uuid: Option<Uuid>,
    pub role: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AdministratorRecord> for AdministratorResponse {
    fn from(record: AdministratorRecord) -> Self {
        Self {
            uuid: record.uuid.into(),
            username: record.username,
            email: record.email,
            first_name: record.first_name,
            mid_name: record.mid_name,
            last_name: record.last_name,
            phone: record.phone,
            designation: record.designation,
            role_uuid: record.role_uuid.map(Into::into),
            role: record.role_name,
            is_active: record.is_active,
            last_login_at: record.last_login_at.as_ref().map(ToString::to_string),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Onboarding request as seen by administrators.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientRequestResponse {
    pub uuid: Uuid,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_website: Option<String>,
    pub industry_type: String,
    pub company_size: String,

    /// `pending`, `approved` or `rejected`
    pub status: String,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<String>,
    pub rejected_by: Option<Uuid>,
    pub rejected_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClientRequestRecord> for ClientRequestResponse {
    fn from(record: ClientRequestRecord) -> Self {
        Self {
            uuid: record.uuid.into(),
            company_name: record.company_name,
            company_email: record.company_email,
            company_phone: record.company_phone,
            company_website: record.company_website,
            industry_type: record.industry_type,
            company_size: record.company_size,
            status: record.status.to_string(),
            approved_by: record.approved_by.map(Into::into),
            approved_at: record.approved_at.as_ref().map(ToString::to_string),
            rejected_by: record.rejected_by.map(Into::into),
            rejected_at: record.rejected_at.as_ref().map(ToString::to_string),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientResponse {
    pub uuid: Uuid,
    pub request_uuid: Uuid,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_website: Option<String>,
    pub industry_type: String,
    pub company_size: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClientRecord> for ClientResponse {
    fn from(record: ClientRecord) -> Self {
        Self {
            uuid: record.uuid.into(),
            request_uuid: record.request_uuid.into(),
            company_name: record.company_name,
            company_email: record.company_email,
            company_phone: record.company_phone,
            company_website: record.company_website,
            industry_type: record.industry_type,
            company_size: record.company_size,
            is_verified: record.is_verified,
            is_active: record.is_active,
            last_login_at: record.last_login_at.as_ref().map(ToString::to_string),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientRoleResponse {
    pub uuid: Uuid,
    pub name: String,
    pub is_active: bool,
}

impl From<ClientRoleRecord> for ClientRoleResponse {
    fn from(record: ClientRoleRecord) -> Self {
        Self {
            uuid: record.uuid.into(),
            name: record.name,
            is_active: record.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientUserResponse {
    pub uuid: Uuid,
    pub client_uuid: Uuid,
    pub role_uuid: Option<Uuid>,
    pub role: Option<String>,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClientUserRecord> for ClientUserResponse {
    fn from(record: ClientUserRecord) -> Self {
        Self {
            uuid: record.uuid.into(),
            client_uuid: record.client_uuid.into(),
            role_uuid: record.role_uuid.map(Into::into),
            role: record.role_name,
            email: record.email,
            full_name: record.full_name,
            phone: record.phone,
            is_active: record.is_active,
            last_login_at: record.last_login_at.as_ref().map(ToString::to_string),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardStatsResponse {
    pub total_administrators: i64,
    pub active_administrators: i64,
    pub pending_client_requests: i64,
    pub approved_client_requests: i64,
    pub rejected_client_requests: i64,
    pub total_clients: i64,
    pub active_clients: i64,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_administrators: stats.total_administrators,
            active_administrators: stats.active_administrators,
            pending_client_requests: stats.pending_client_requests,
            approved_client_requests: stats.approved_client_requests,
            rejected_client_requests: stats.rejected_client_requests,
            total_clients: stats.total_clients,
            active_clients: stats.active_clients,
        }
    }
}
