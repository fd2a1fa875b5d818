//! Client Request Data

use validator::Validate;

use crate::auth::password::Password;

/// Onboarding application submitted by a prospective client.
#[derive(Debug, Clone, Validate)]
pub struct NewClientRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,

    #[validate(email)]
    pub company_email: String,

    #[validate(length(min = 1, max = 20))]
    pub company_phone: String,

    #[validate(url)]
    pub company_website: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub industry_type: String,

    #[validate(length(min = 1, max = 50))]
    pub company_size: String,

    pub password: Password,
}
