//! Login Use Case
//!
//! Checks credentials against the user directory, mints an opaque token and
//! registers the user snapshot under it.

use std::sync::Arc;

use platform::crypto::random_token;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::authenticated_user::AuthenticatedUser;
use crate::domain::registry::SessionRegistry;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Token registered for this login
    pub token: String,
    /// Snapshot stored in the registry
    pub user: Arc<AuthenticatedUser>,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    registry: Arc<SessionRegistry>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, registry: Arc<SessionRegistry>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            registry,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&ClearTextPassword::new(input.password)) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = random_token(self.config.token_bytes);
        let snapshot = Arc::new(AuthenticatedUser::from(&user));
        self.registry.put(token.clone(), Arc::clone(&snapshot));

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput {
            token,
            user: snapshot,
        })
    }
}
