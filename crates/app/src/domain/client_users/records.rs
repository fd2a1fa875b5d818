//! Client User Records

use jiff::Timestamp;

use crate::{
    auth::password::PasswordDigest,
    domain::{client_roles::records::ClientRoleUuid, clients::records::ClientUuid},
    uuids::TypedUuid,
};

/// Client User UUID
pub type ClientUserUuid = TypedUuid<ClientUserRecord>;

/// Client User Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUserRecord {
    pub uuid: ClientUserUuid,

    /// Owning tenant.
    pub client_uuid: ClientUuid,
    pub role_uuid: Option<ClientRoleUuid>,

    /// Joined from the role table.
    pub role_name: Option<String>,
    pub email: String,
    pub password_digest: PasswordDigest,
    pub full_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
