//! Tenantry Domain Concerns

pub mod administrators;
pub mod client_requests;
pub mod client_roles;
pub mod client_users;
pub mod clients;
