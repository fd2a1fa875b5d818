//! The acting administrator's own profile

pub(crate) mod change_password;
pub(crate) mod get;
pub(crate) mod update;
