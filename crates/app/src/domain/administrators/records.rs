//! Administrator Records

use jiff::Timestamp;

use crate::{auth::password::PasswordDigest, uuids::TypedUuid};

/// Administrator UUID
pub type AdministratorUuid = TypedUuid<AdministratorRecord>;

/// Administrator Role UUID
pub type AdministratorRoleUuid = TypedUuid<AdministratorRoleRecord>;

/// Administrator Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministratorRecord {
    pub uuid: AdministratorUuid,
    pub username: String,
    pub email: String,
    pub password_digest: PasswordDigest,
    pub first_name: String,
    pub mid_name: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub role_uuid: Option<AdministratorRoleUuid>,

    /// Joined from the role table. `None` while the role is inactive.
    pub role_name: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdministratorRecord {
    /// First, middle and last name joined with spaces.
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.mid_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Administrator Role Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministratorRoleRecord {
    pub uuid: AdministratorRoleUuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Headline numbers for the administrator dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_administrators: i64,
    pub active_administrators: i64,
    pub pending_client_requests: i64,
    pub approved_client_requests: i64,
    pub rejected_client_requests: i64,
    pub total_clients: i64,
    pub active_clients: i64,
}
