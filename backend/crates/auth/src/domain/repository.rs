//! Repository Traits
//!
//! Interface to the user directory. Implementation is in the infra layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User directory trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by email (ASCII case-insensitive)
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// All users, ordered by ID
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Record the last login address; returns the updated user
    async fn update_last_login_ip(&self, user_id: UserId, ip: &str) -> AuthResult<Option<User>>;
}
