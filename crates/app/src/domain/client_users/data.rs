//! Client User Data

use validator::Validate;

use crate::{auth::password::Password, domain::client_roles::records::ClientRoleUuid};

/// New Client User Data
#[derive(Debug, Clone, Validate)]
pub struct NewClientUser {
    #[validate(email)]
    pub email: String,

    pub password: Password,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    pub role_uuid: Option<ClientRoleUuid>,
}

/// Client user changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientUserUpdate {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    pub role_uuid: Option<ClientRoleUuid>,
}
