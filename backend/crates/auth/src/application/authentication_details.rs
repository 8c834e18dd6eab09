//! Authentication Details Use Case
//!
//! Lists every directory user together with its current session token.

use std::sync::Arc;

use crate::domain::registry::SessionRegistry;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// One listed user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsOutput {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Password hash with every character masked
    pub password: String,
    pub last_login_ip: Option<String>,
    /// Current token, if the user has logged in since startup
    pub token: Option<String>,
}

/// Authentication details use case
pub struct AuthenticationDetailsUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    registry: Arc<SessionRegistry>,
}

impl<R> AuthenticationDetailsUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            user_repo,
            registry,
        }
    }

    pub async fn execute(&self) -> AuthResult<Vec<UserDetailsOutput>> {
        let users = self.user_repo.list().await?;

        Ok(users
            .into_iter()
            .map(|user| UserDetailsOutput {
                token: self.registry.token_of(&user),
                password: user.masked_password(),
                id: user.id,
                username: user.username,
                email: user.email,
                last_login_ip: user.last_login_ip,
            })
            .collect())
    }
}
