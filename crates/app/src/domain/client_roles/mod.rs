//! Client Roles

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ClientRolesServiceError;
pub use service::*;
