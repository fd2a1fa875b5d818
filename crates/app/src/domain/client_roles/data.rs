//! Client Role Data

use validator::Validate;

/// New Client Role Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewClientRole {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Client role changes. `None` leaves the name untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientRoleUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}
