//! State

use std::sync::Arc;

use tenantry_app::{auth::Policy, context::AppContext};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Role required to manage other administrators.
    pub(crate) management_role: Option<String>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, management_role: Option<String>) -> Self {
        Self {
            app,
            management_role,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, management_role: Option<String>) -> Arc<Self> {
        Arc::new(Self::new(app, management_role))
    }

    pub(crate) fn management_policy(&self) -> Policy<'_> {
        Policy::Administrator {
            role: self.management_role.as_deref(),
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("management_role", &self.management_role)
            .finish_non_exhaustive()
    }
}
