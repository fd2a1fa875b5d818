//! Administrator management

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod toggle_status;
pub(crate) mod update;
