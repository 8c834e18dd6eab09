//! User Entity
//!
//! A shop user as held by the user directory.

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use serde::Deserialize;

use crate::domain::value_object::user_id::{UserId, UserIdentity};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Argon2id hash of the password
    pub password_hash: HashedPassword,
    /// Last address recorded by save-login-ip, stored verbatim
    pub last_login_ip: Option<String>,
}

impl User {
    /// Create a user, hashing `password`
    pub fn with_password(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password: &ClearTextPassword,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password.hash()?,
            last_login_ip: None,
        })
    }

    /// Email comparison is ASCII case-insensitive
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    pub fn verify_password(&self, password: &ClearTextPassword) -> bool {
        self.password_hash.verify(password)
    }

    pub fn record_login_ip(&mut self, ip: impl Into<String>) {
        self.last_login_ip = Some(ip.into());
    }

    /// Password hash with every character replaced by `*`
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password_hash.as_phc_string().chars().count())
    }
}

impl UserIdentity for User {
    fn user_id(&self) -> UserId {
        self.id
    }
}

/// Seed record as found in a user seed file
///
/// Seeds carry clear text passwords; they are hashed when the directory loads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<SeedUser> for User {
    type Error = PasswordHashError;

    fn try_from(seed: SeedUser) -> Result<Self, Self::Error> {
        let password = ClearTextPassword::new(seed.password);
        User::with_password(seed.id, seed.username, seed.email, &password)
    }
}
