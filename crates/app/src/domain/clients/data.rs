//! Client Data

use validator::Validate;

/// Company profile changes. The company email is the login identifier and
/// cannot be changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientProfileUpdate {
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub company_phone: Option<String>,

    #[validate(url)]
    pub company_website: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub industry_type: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub company_size: Option<String>,
}
