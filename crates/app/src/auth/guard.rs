//! Per-operation authorization policies.

use thiserror::Error;

use crate::{
    auth::actor::{ActorKind, AuthenticatedActor},
    domain::clients::records::ClientUuid,
    errors::{ClassifiedError, ErrorKind},
};

/// Who may invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy<'a> {
    /// Any active administrator, optionally restricted to a named role.
    Administrator { role: Option<&'a str> },

    /// The tenant owner only.
    ClientOwner,

    /// The tenant owner or any of its staff.
    TenantMember,
}

impl Policy<'_> {
    /// Any active administrator.
    pub const ADMINISTRATOR: Policy<'static> = Policy::Administrator { role: None };

    fn admits(&self, kind: ActorKind) -> bool {
        match self {
            Policy::Administrator { .. } => kind == ActorKind::Administrator,
            Policy::ClientOwner => kind == ActorKind::Client,
            Policy::TenantMember => matches!(kind, ActorKind::Client | ActorKind::ClientUser),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{0} actors may not perform this operation")]
    WrongKind(ActorKind),

    #[error("actor is deactivated")]
    Inactive,

    #[error("administrator lacks the required role")]
    MissingRole,

    /// Reported to callers as not-found so that other tenants' ids are not confirmed.
    #[error("resource belongs to another tenant")]
    TenantMismatch,
}

impl ClassifiedError for GuardError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongKind(_) | Self::Inactive | Self::MissingRole => {
                ErrorKind::AuthorizationDenied
            }
            Self::TenantMismatch => ErrorKind::NotFound,
        }
    }
}

/// Check an actor against a policy.
///
/// # Errors
///
/// Returns a [`GuardError`] describing the first failed requirement.
pub fn authorize(actor: &AuthenticatedActor, policy: &Policy<'_>) -> Result<(), GuardError> {
    if !policy.admits(actor.kind()) {
        return Err(GuardError::WrongKind(actor.kind()));
    }

    if !actor.is_active() {
        return Err(GuardError::Inactive);
    }

    if let (
        Policy::Administrator {
            role: Some(required),
        },
        AuthenticatedActor::Administrator(administrator),
    ) = (policy, actor)
        && administrator.role() != Some(*required)
    {
        return Err(GuardError::MissingRole);
    }

    Ok(())
}

/// Authorize and return the acting tenant.
///
/// # Errors
///
/// Returns a [`GuardError`] when the policy rejects the actor or the actor has no tenant.
pub fn authorize_tenant(
    actor: &AuthenticatedActor,
    policy: &Policy<'_>,
) -> Result<ClientUuid, GuardError> {
    authorize(actor, policy)?;

    actor.tenant().ok_or(GuardError::WrongKind(actor.kind()))
}

/// Require that a resource is owned by the actor's tenant.
///
/// # Errors
///
/// Returns [`GuardError::TenantMismatch`] when the owners differ or the actor has no tenant.
pub fn ensure_same_tenant(actor: &AuthenticatedActor, owner: ClientUuid) -> Result<(), GuardError> {
    match actor.tenant() {
        Some(tenant) if tenant == owner => Ok(()),
        Some(_) | None => Err(GuardError::TenantMismatch),
    }
}
