//! Client Records

use jiff::Timestamp;

use crate::{
    auth::password::PasswordDigest, domain::client_requests::records::ClientRequestUuid,
    uuids::TypedUuid,
};

/// Client UUID
pub type ClientUuid = TypedUuid<ClientRecord>;

/// A tenant: the business materialized from an approved onboarding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub uuid: ClientUuid,
    pub request_uuid: ClientRequestUuid,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_website: Option<String>,
    pub industry_type: String,
    pub company_size: String,
    pub password_digest: PasswordDigest,
    pub is_verified: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
