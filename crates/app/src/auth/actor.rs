//! Authenticated actors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    administrators::records::{AdministratorRecord, AdministratorUuid},
    client_roles::records::ClientRoleUuid,
    client_users::records::{ClientUserRecord, ClientUserUuid},
    clients::records::{ClientRecord, ClientUuid},
};

/// The three kinds of principal that can hold a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Administrator,
    Client,
    ClientUser,
}

impl ActorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Client => "client",
            Self::ClientUser => "client_user",
        }
    }
}

impl Display for ActorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Platform administrator resolved from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministratorPrincipal {
    uuid: AdministratorUuid,
    username: String,
    role: Option<String>,
    is_active: bool,
}

impl AdministratorPrincipal {
    #[must_use]
    pub fn uuid(&self) -> AdministratorUuid {
        self.uuid
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Name of the administrator's role, if one is assigned.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl From<&AdministratorRecord> for AdministratorPrincipal {
    fn from(record: &AdministratorRecord) -> Self {
        Self {
            uuid: record.uuid,
            username: record.username.clone(),
            role: record.role_name.clone(),
            is_active: record.is_active,
        }
    }
}

/// Tenant owner resolved from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPrincipal {
    uuid: ClientUuid,
    is_active: bool,
}

impl ClientPrincipal {
    #[must_use]
    pub fn uuid(&self) -> ClientUuid {
        self.uuid
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl From<&ClientRecord> for ClientPrincipal {
    fn from(record: &ClientRecord) -> Self {
        Self {
            uuid: record.uuid,
            is_active: record.is_active,
        }
    }
}

/// Tenant staff member resolved from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUserPrincipal {
    uuid: ClientUserUuid,
    client: ClientUuid,
    role: Option<ClientRoleUuid>,
    is_active: bool,
}

impl ClientUserPrincipal {
    #[must_use]
    pub fn uuid(&self) -> ClientUserUuid {
        self.uuid
    }

    /// The tenant this user belongs to.
    #[must_use]
    pub fn client(&self) -> ClientUuid {
        self.client
    }

    #[must_use]
    pub fn role(&self) -> Option<ClientRoleUuid> {
        self.role
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl From<&ClientUserRecord> for ClientUserPrincipal {
    fn from(record: &ClientUserRecord) -> Self {
        Self {
            uuid: record.uuid,
            client: record.client_uuid,
            role: record.role_uuid,
            is_active: record.is_active,
        }
    }
}

/// The caller of a protected operation.
///
/// Only produced by token validation; there is no way to change the kind or
/// identity of an actor after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatedActor {
    Administrator(AdministratorPrincipal),
    Client(ClientPrincipal),
    ClientUser(ClientUserPrincipal),
}

impl AuthenticatedActor {
    #[must_use]
    pub fn kind(&self) -> ActorKind {
        match self {
            Self::Administrator(_) => ActorKind::Administrator,
            Self::Client(_) => ActorKind::Client,
            Self::ClientUser(_) => ActorKind::ClientUser,
        }
    }

    /// Identifier of the underlying record.
    #[must_use]
    pub fn subject(&self) -> Uuid {
        match self {
            Self::Administrator(administrator) => administrator.uuid.into_uuid(),
            Self::Client(client) => client.uuid.into_uuid(),
            Self::ClientUser(user) => user.uuid.into_uuid(),
        }
    }

    /// The tenant the actor acts on behalf of. Administrators have none.
    #[must_use]
    pub fn tenant(&self) -> Option<ClientUuid> {
        match self {
            Self::Administrator(_) => None,
            Self::Client(client) => Some(client.uuid),
            Self::ClientUser(user) => Some(user.client),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Administrator(administrator) => administrator.is_active,
            Self::Client(client) => client.is_active,
            Self::ClientUser(user) => user.is_active,
        }
    }
}

impl From<&AdministratorRecord> for AuthenticatedActor {
    fn from(record: &AdministratorRecord) -> Self {
        Self::Administrator(record.into())
    }
}

impl From<&ClientRecord> for AuthenticatedActor {
    fn from(record: &ClientRecord) -> Self {
        Self::Client(record.into())
    }
}

impl From<&ClientUserRecord> for AuthenticatedActor {
    fn from(record: &ClientUserRecord) -> Self {
        Self::ClientUser(record.into())
    }
}
