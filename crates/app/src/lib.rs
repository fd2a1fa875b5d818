//! Tenantry application core: domain services, persistence and authentication.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod uuids;
pub mod validation;

#[cfg(test)]
mod test;
