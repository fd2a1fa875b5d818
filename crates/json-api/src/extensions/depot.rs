//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use tenantry_app::auth::AuthenticatedActor;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_actor(&mut self, actor: AuthenticatedActor);

    /// The actor placed by the auth middleware.
    fn actor_or_401(&self) -> Result<&AuthenticatedActor, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_actor(&mut self, actor: AuthenticatedActor) {
        self.inject(actor);
    }

    fn actor_or_401(&self) -> Result<&AuthenticatedActor, StatusError> {
        self.obtain::<AuthenticatedActor>()
            .map_err(|_ignored| StatusError::unauthorized().brief("authentication_failed"))
    }
}
