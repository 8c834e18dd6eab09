//! Authenticated User Snapshot
//!
//! The copy of a [`User`] taken at login and stored in the session registry.
//! The directory keeps the canonical record; later changes there are not
//! reflected in a snapshot.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::{UserId, UserIdentity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// PHC string of the directory's password hash at login time
    pub password_hash: String,
    pub last_login_ip: Option<String>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.as_phc_string().to_string(),
            last_login_ip: user.last_login_ip.clone(),
        }
    }
}

impl UserIdentity for AuthenticatedUser {
    fn user_id(&self) -> UserId {
        self.id
    }
}
