//! Administrators Data

use validator::Validate;

use crate::{
    auth::password::Password,
    domain::administrators::records::AdministratorRoleUuid,
};

/// New Administrator Data
#[derive(Debug, Clone, Validate)]
pub struct NewAdministrator {
    #[validate(length(min = 3, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    pub password: Password,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub mid_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 150))]
    pub designation: Option<String>,

    pub role_uuid: Option<AdministratorRoleUuid>,
}

/// Administrator profile changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AdministratorUpdate {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub mid_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 150))]
    pub designation: Option<String>,
}

/// Self-service password change.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub old_password: Password,
    pub new_password: Password,
    pub confirm_password: Password,
}

/// New Administrator Role Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAdministratorRole {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
