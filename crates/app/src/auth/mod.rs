//! Authentication and authorization

pub mod actor;
mod errors;
pub mod guard;
pub mod password;
mod service;
pub mod token;

pub use actor::{ActorKind, AuthenticatedActor};
pub use errors::*;
pub use guard::{GuardError, Policy, authorize, authorize_tenant, ensure_same_tenant};
pub use service::*;
pub use token::{TokenIssuer, TokenPair, TokenSettings};
