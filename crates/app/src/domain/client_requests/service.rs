//! Onboarding workflow.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::password::{self, Password},
    domain::{
        administrators::records::AdministratorUuid,
        client_requests::{
            data::NewClientRequest,
            errors::ClientRequestsServiceError,
            records::{ClientRequestRecord, ClientRequestStatus, ClientRequestUuid},
            repository::{ClientRequestsRepository, PgClientRequestsRepository},
        },
        clients::records::{ClientRecord, ClientUuid},
    },
    validation::{self, normalize_email},
};

#[derive(Clone)]
pub struct PgClientRequestsService {
    repository: Arc<dyn ClientRequestsRepository>,
}

impl PgClientRequestsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgClientRequestsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn ClientRequestsRepository>) -> Self {
        Self { repository }
    }

    /// Report why a conditional status update matched nothing.
    async fn refused(
        &self,
        request: ClientRequestUuid,
        action: &'static str,
    ) -> ClientRequestsServiceError {
        match self.repository.get_request(request).await {
            Ok(Some(current)) => ClientRequestsServiceError::InvalidStateTransition {
                status: current.status,
                action,
            },
            Ok(None) => ClientRequestsServiceError::NotFound,
            Err(error) => error.into(),
        }
    }
}

impl std::fmt::Debug for PgClientRequestsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgClientRequestsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ClientRequestsService for PgClientRequestsService {
    async fn submit_request(
        &self,
        mut request: NewClientRequest,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError> {
        request.company_name = request.company_name.trim().to_string();
        request.company_email = normalize_email(&request.company_email);
        request.company_website = request
            .company_website
            .map(|website| website.trim().to_string())
            .filter(|website| !website.is_empty());

        let mut errors = validation::validate(&request).err().unwrap_or_default();

        if let Err(password_errors) = request.password.check_length("password") {
            errors.extend(password_errors);
        }

        errors.into_result()?;

        if self
            .repository
            .has_pending_request(&request.company_email)
            .await?
        {
            return Err(ClientRequestsServiceError::DuplicateRequest);
        }

        let digest = password::hash_password(&request.password)?;

        let created = self
            .repository
            .create_request(ClientRequestUuid::new(), &request, &digest)
            .await?;

        info!(client_request_uuid = %created.uuid, "client request submitted");

        Ok(created)
    }

    async fn list_requests(
        &self,
        status: Option<ClientRequestStatus>,
    ) -> Result<Vec<ClientRequestRecord>, ClientRequestsServiceError> {
        Ok(self.repository.list_requests(status).await?)
    }

    async fn get_request(
        &self,
        request: ClientRequestUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError> {
        self.repository
            .get_request(request)
            .await?
            .ok_or(ClientRequestsServiceError::NotFound)
    }

    async fn approve_request(
        &self,
        request: ClientRequestUuid,
        approver: AdministratorUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError> {
        let current = self.get_request(request).await?;

        if !current.status.can_transition_to(ClientRequestStatus::Approved) {
            return Err(ClientRequestsServiceError::InvalidStateTransition {
                status: current.status,
                action: "approve",
            });
        }

        let Some(approved) = self
            .repository
            .approve_request(request, approver, Timestamp::now())
            .await?
        else {
            return Err(self.refused(request, "approve").await);
        };

        info!(
            client_request_uuid = %request,
            administrator_uuid = %approver,
            "client request approved"
        );

        Ok(approved)
    }

    async fn reject_request(
        &self,
        request: ClientRequestUuid,
        reviewer: AdministratorUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError> {
        let current = self.get_request(request).await?;

        if !current.status.can_transition_to(ClientRequestStatus::Rejected) {
            return Err(ClientRequestsServiceError::InvalidStateTransition {
                status: current.status,
                action: "reject",
            });
        }

        let Some(rejected) = self
            .repository
            .reject_request(request, reviewer, Timestamp::now())
            .await?
        else {
            return Err(self.refused(request, "reject").await);
        };

        info!(
            client_request_uuid = %request,
            administrator_uuid = %reviewer,
            "client request rejected"
        );

        Ok(rejected)
    }

    async fn materialize_client(
        &self,
        request: ClientRequestUuid,
        staged_password: Password,
    ) -> Result<ClientRecord, ClientRequestsServiceError> {
        let Some(current) = self.repository.get_request(request).await? else {
            password::verify_dummy(&staged_password);

            return Err(ClientRequestsServiceError::InvalidCredentials);
        };

        if !password::verify_password(&staged_password, &current.password_digest) {
            return Err(ClientRequestsServiceError::InvalidCredentials);
        }

        if current.status != ClientRequestStatus::Approved {
            return Err(ClientRequestsServiceError::InvalidStateTransition {
                status: current.status,
                action: "materialize",
            });
        }

        // The request disappeared between the two statements.
        let client = self
            .repository
            .materialize_client(request, ClientUuid::new())
            .await?
            .ok_or(ClientRequestsServiceError::InvalidCredentials)?;

        info!(
            client_request_uuid = %request,
            client_uuid = %client.uuid,
            "client materialized from request"
        );

        Ok(client)
    }
}

#[automock]
#[async_trait]
pub trait ClientRequestsService: Send + Sync {
    /// Record a new onboarding request in `pending`.
    async fn submit_request(
        &self,
        request: NewClientRequest,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError>;

    /// All requests, newest first, optionally filtered by status.
    async fn list_requests(
        &self,
        status: Option<ClientRequestStatus>,
    ) -> Result<Vec<ClientRequestRecord>, ClientRequestsServiceError>;

    async fn get_request(
        &self,
        request: ClientRequestUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError>;

    /// `pending` to `approved`, recording the approver and time.
    async fn approve_request(
        &self,
        request: ClientRequestUuid,
        approver: AdministratorUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError>;

    /// `pending` to `rejected`.
    async fn reject_request(
        &self,
        request: ClientRequestUuid,
        reviewer: AdministratorUuid,
    ) -> Result<ClientRequestRecord, ClientRequestsServiceError>;

    /// Create the client for an approved request. The applicant proves
    /// ownership with the password staged at submission.
    async fn materialize_client(
        &self,
        request: ClientRequestUuid,
        staged_password: Password,
    ) -> Result<ClientRecord, ClientRequestsServiceError>;
}
