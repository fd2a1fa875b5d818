//! Client users

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod password_reset;
pub(crate) mod toggle_status;
pub(crate) mod update;
