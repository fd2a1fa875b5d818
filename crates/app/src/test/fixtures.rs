//! Record fixtures for unit tests.

use jiff::Timestamp;

use crate::{
    auth::password::{self, Password, PasswordDigest, PasswordError},
    domain::{
        administrators::records::{
            AdministratorRecord, AdministratorRoleRecord, AdministratorRoleUuid, AdministratorUuid,
        },
        client_requests::records::{ClientRequestRecord, ClientRequestStatus, ClientRequestUuid},
        client_roles::records::{ClientRoleRecord, ClientRoleUuid},
        client_users::records::{ClientUserRecord, ClientUserUuid},
        clients::records::{ClientRecord, ClientUuid},
    },
};

/// Well-formed digest that no test password matches.
const UNUSABLE_DIGEST: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1",
    "$dW51c2FibGVzYWx0$bm90IGEgcmVhbCBoYXNoIGF0IGFsbA"
);

fn unusable_digest() -> PasswordDigest {
    PasswordDigest::from(UNUSABLE_DIGEST.to_string())
}

pub(crate) fn administrator(username: &str) -> AdministratorRecord {
    let now = Timestamp::now();

    AdministratorRecord {
        uuid: AdministratorUuid::new(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_digest: unusable_digest(),
        first_name: "Ada".to_string(),
        mid_name: None,
        last_name: "Lovelace".to_string(),
        phone: None,
        designation: None,
        role_uuid: None,
        role_name: None,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn administrator_with_password(
    username: &str,
    password: &str,
) -> Result<AdministratorRecord, PasswordError> {
    Ok(AdministratorRecord {
        password_digest: password::hash_password(&Password::new(password))?,
        ..administrator(username)
    })
}

pub(crate) fn administrator_role(name: &str) -> AdministratorRoleRecord {
    let now = Timestamp::now();

    AdministratorRoleRecord {
        uuid: AdministratorRoleUuid::new(),
        name: name.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn client_request(company_email: &str) -> ClientRequestRecord {
    let now = Timestamp::now();

    ClientRequestRecord {
        uuid: ClientRequestUuid::new(),
        company_name: "Acme".to_string(),
        company_email: company_email.to_string(),
        company_phone: "+44 20 7946 0000".to_string(),
        company_website: None,
        industry_type: "Manufacturing".to_string(),
        company_size: "11-50".to_string(),
        password_digest: unusable_digest(),
        status: ClientRequestStatus::Pending,
        approved_by: None,
        approved_at: None,
        rejected_by: None,
        rejected_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn client_request_with_password(
    company_email: &str,
    password: &str,
) -> Result<ClientRequestRecord, PasswordError> {
    Ok(ClientRequestRecord {
        password_digest: password::hash_password(&Password::new(password))?,
        ..client_request(company_email)
    })
}

pub(crate) fn client(company_email: &str) -> ClientRecord {
    let now = Timestamp::now();

    ClientRecord {
        uuid: ClientUuid::new(),
        request_uuid: ClientRequestUuid::new(),
        company_name: "Acme".to_string(),
        company_email: company_email.to_string(),
        company_phone: "+44 20 7946 0000".to_string(),
        company_website: None,
        industry_type: "Manufacturing".to_string(),
        company_size: "11-50".to_string(),
        password_digest: unusable_digest(),
        is_verified: true,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn client_with_password(
    company_email: &str,
    password: &str,
) -> Result<ClientRecord, PasswordError> {
    Ok(ClientRecord {
        password_digest: password::hash_password(&Password::new(password))?,
        ..client(company_email)
    })
}

pub(crate) fn client_role(name: &str) -> ClientRoleRecord {
    let now = Timestamp::now();

    ClientRoleRecord {
        uuid: ClientRoleUuid::new(),
        name: name.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn client_user(client_uuid: ClientUuid, email: &str) -> ClientUserRecord {
    let now = Timestamp::now();

    ClientUserRecord {
        uuid: ClientUserUuid::new(),
        client_uuid,
        role_uuid: None,
        role_name: None,
        email: email.to_string(),
        password_digest: unusable_digest(),
        full_name: "Grace Hopper".to_string(),
        phone: None,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn client_user_with_password(
    client_uuid: ClientUuid,
    email: &str,
    password: &str,
) -> Result<ClientUserRecord, PasswordError> {
    Ok(ClientUserRecord {
        password_digest: password::hash_password(&Password::new(password))?,
        ..client_user(client_uuid, email)
    })
}
