//! App Router

use salvo::Router;

use crate::{admin, auth, client};

/// Routes reachable without a bearer token.
pub fn public_router() -> Router {
    Router::new()
        .push(Router::with_path("admin/login").post(admin::login::handler))
        .push(Router::with_path("auth/refresh").post(auth::refresh::handler))
        .push(
            Router::with_path("client")
                .push(Router::with_path("login").post(client::login::handler))
                .push(Router::with_path("request").post(client::request::handler))
                .push(Router::with_path("signup").post(client::signup::handler))
                .push(Router::with_path("users/login").post(client::users::login::handler)),
        )
}

/// Routes behind the bearer token middleware.
pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(admin_router())
        .push(client_router())
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .push(
            Router::with_path("client-requests")
                .get(admin::client_requests::index::handler)
                .push(
                    Router::with_path("{request}")
                        .get(admin::client_requests::get::handler)
                        .push(
                            Router::with_path("approve")
                                .post(admin::client_requests::approve::handler),
                        )
                        .push(
                            Router::with_path("reject")
                                .post(admin::client_requests::reject::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("profile")
                .get(admin::profile::get::handler)
                .patch(admin::profile::update::handler),
        )
        .push(Router::with_path("change-password").post(admin::profile::change_password::handler))
        .push(Router::with_path("dashboard-stats").get(admin::dashboard::handler))
        .push(
            Router::with_path("management")
                .get(admin::management::index::handler)
                .post(admin::management::create::handler)
                .push(
                    Router::with_path("{administrator}")
                        .get(admin::management::get::handler)
                        .patch(admin::management::update::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .post(admin::management::toggle_status::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("clients")
                .get(admin::clients::index::handler)
                .push(
                    Router::with_path("{client}/toggle-status")
                        .post(admin::clients::toggle_status::handler),
                ),
        )
}

fn client_router() -> Router {
    Router::with_path("client")
        .push(
            Router::with_path("profile")
                .get(client::profile::get::handler)
                .patch(client::profile::update::handler),
        )
        .push(
            Router::with_path("roles")
                .get(client::roles::index::handler)
                .post(client::roles::create::handler)
                .push(
                    Router::with_path("{role}")
                        .get(client::roles::get::handler)
                        .patch(client::roles::update::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .post(client::roles::toggle_status::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("users")
                .get(client::users::index::handler)
                .post(client::users::create::handler)
                .push(
                    Router::with_path("{user}")
                        .get(client::users::get::handler)
                        .patch(client::users::update::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .post(client::users::toggle_status::handler),
                        )
                        .push(
                            Router::with_path("password-reset")
                                .post(client::users::password_reset::handler),
                        ),
                ),
        )
}
