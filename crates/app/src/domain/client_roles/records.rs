//! Client Role Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Client Role UUID
pub type ClientRoleUuid = TypedUuid<ClientRoleRecord>;

/// Client Role Record
///
/// Roles are shared by every tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRoleRecord {
    pub uuid: ClientRoleUuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
