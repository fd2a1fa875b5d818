//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use tenantry_app::errors::{ClassifiedError, ErrorKind};

use crate::{extensions::*, state::State};

/// Resolve the bearer token to an actor and place it in the depot.
///
/// Every token failure is answered with the same 401 so callers cannot tell
/// an expired token from one whose subject was deactivated.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("authentication_failed"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state.clone(),
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    let actor = match state.app.auth.authenticate_bearer(token).await {
        Ok(actor) => actor,
        Err(source) if source.kind() == ErrorKind::Internal => {
            error!("failed to authenticate bearer token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
        Err(source) => {
            debug!("rejected bearer token: {source}");

            res.render(StatusError::unauthorized().brief("authentication_failed"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_actor(actor);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
