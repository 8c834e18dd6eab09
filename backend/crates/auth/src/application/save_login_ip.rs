//! Save Login IP Use Case
//!
//! Records the caller's address on the directory user behind the bearer
//! token. The registry snapshot is left untouched.

use std::net::IpAddr;
use std::sync::Arc;

use platform::client::extract_client_ip;
use platform::header::HeaderCarrier;

use crate::domain::entity::user::User;
use crate::domain::registry::SessionRegistry;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Save login IP use case
pub struct SaveLoginIpUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    registry: Arc<SessionRegistry>,
}

impl<R> SaveLoginIpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            user_repo,
            registry,
        }
    }

    /// ## Arguments
    /// * `carrier` - request headers (bearer token, client address headers)
    /// * `peer_ip` - socket address of the connection, if known
    pub async fn execute<C>(&self, carrier: &C, peer_ip: Option<IpAddr>) -> AuthResult<User>
    where
        C: HeaderCarrier + Sync + ?Sized,
    {
        let session = self
            .registry
            .from_carrier(carrier)
            .ok_or(AuthError::Unauthenticated)?;

        let Some(ip) = extract_client_ip(carrier, peer_ip) else {
            tracing::debug!(user_id = %session.id, "Client address unknown, nothing recorded");
            return self
                .user_repo
                .find_by_id(session.id)
                .await?
                .ok_or(AuthError::UserNotFound);
        };

        let user = self
            .user_repo
            .update_last_login_ip(session.id, &ip)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %user.id, client_ip = %ip, "Saved login IP");

        Ok(user)
    }
}
