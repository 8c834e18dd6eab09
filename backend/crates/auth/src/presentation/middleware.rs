//! Auth Middleware
//!
//! Bearer-token guard for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::domain::entity::authenticated_user::AuthenticatedUser;
use crate::domain::registry::SessionRegistry;
use crate::error::AuthError;

/// Session resolved by [`require_bearer_session`], stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Arc<AuthenticatedUser>);

/// Middleware that requires `Authorization: Bearer <token>` of a registered session
///
/// Use with `axum::middleware::from_fn_with_state(registry, require_bearer_session)`.
pub async fn require_bearer_session(
    State(registry): State<Arc<SessionRegistry>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = registry
        .from_carrier(&req)
        .ok_or(AuthError::Unauthenticated)?;

    tracing::debug!(user_id = %user.id, "Bearer session accepted");
    req.extensions_mut().insert(CurrentSession(user));

    Ok(next.run(req).await)
}
