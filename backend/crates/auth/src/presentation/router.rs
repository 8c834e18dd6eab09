//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::registry::SessionRegistry;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any user directory
///
/// The registry is shared with whatever else resolves sessions (the bearer
/// middleware in particular), so it is passed in rather than created here.
pub fn auth_router<R>(repo: R, registry: Arc<SessionRegistry>, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        registry,
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/whoami", get(handlers::whoami::<R>))
        .route(
            "/authentication-details",
            get(handlers::authentication_details::<R>),
        )
        .route("/save-login-ip", post(handlers::save_login_ip::<R>))
        .with_state(state)
}
