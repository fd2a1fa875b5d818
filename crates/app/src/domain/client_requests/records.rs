//! Client Request Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    auth::password::PasswordDigest, domain::administrators::records::AdministratorUuid,
    uuids::TypedUuid,
};

/// Client Request UUID
pub type ClientRequestUuid = TypedUuid<ClientRequestRecord>;

/// Onboarding status. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClientRequestStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a request may move from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved | Self::Rejected)
        )
    }
}

impl Display for ClientRequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown client request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ClientRequestStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Client Request Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequestRecord {
    pub uuid: ClientRequestUuid,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_website: Option<String>,
    pub industry_type: String,
    pub company_size: String,

    /// Staged credential, carried over to the client on signup.
    pub password_digest: PasswordDigest,
    pub status: ClientRequestStatus,
    pub approved_by: Option<AdministratorUuid>,
    pub approved_at: Option<Timestamp>,
    pub rejected_by: Option<AdministratorUuid>,
    pub rejected_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_requests_can_move() {
        use ClientRequestStatus::{Approved, Pending, Rejected};

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));

        for from in [Approved, Rejected] {
            for to in [Pending, Approved, Rejected] {
                assert!(!from.can_transition_to(to), "{from} -> {to} should be refused");
            }
        }

        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn status_parses_its_own_names() {
        for status in [
            ClientRequestStatus::Pending,
            ClientRequestStatus::Approved,
            ClientRequestStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ClientRequestStatus>(), Ok(status));
        }

        assert_eq!(
            "archived".parse::<ClientRequestStatus>(),
            Err(UnknownStatus("archived".to_string()))
        );
    }
}
