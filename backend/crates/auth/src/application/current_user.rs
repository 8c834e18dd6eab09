//! Current User Use Case
//!
//! Answers "who am I" for the token cookie. Never fails: an unknown or
//! missing token yields an output with every field empty.

use std::sync::Arc;

use crate::domain::entity::authenticated_user::AuthenticatedUser;
use crate::domain::registry::SessionRegistry;
use crate::domain::value_object::user_id::UserId;

/// Current user output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUserOutput {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub last_login_ip: Option<String>,
}

impl From<Option<&AuthenticatedUser>> for CurrentUserOutput {
    fn from(user: Option<&AuthenticatedUser>) -> Self {
        match user {
            Some(user) => Self {
                id: Some(user.id),
                email: Some(user.email.clone()),
                last_login_ip: user.last_login_ip.clone(),
            },
            None => Self::default(),
        }
    }
}

/// Current user use case
pub struct CurrentUserUseCase {
    registry: Arc<SessionRegistry>,
}

impl CurrentUserUseCase {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, token: Option<&str>) -> CurrentUserOutput {
        let user = token.and_then(|token| self.registry.get(token));
        CurrentUserOutput::from(user.as_deref())
    }
}
