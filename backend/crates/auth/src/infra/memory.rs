//! In-Memory User Directory
//!
//! Users live for the lifetime of the process. The directory is seeded at
//! startup, either from a JSON file or from the built-in demo accounts.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use kernel::error::app_error::{AppError, AppResult};
use parking_lot::RwLock;

use crate::domain::entity::user::{SeedUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Demo accounts used when no seed file is configured
const DEMO_SEED: &str = r#"[
    { "id": 1, "email": "admin@juice-sh.op", "password": "admin123" },
    { "id": 2, "email": "jim@juice-sh.op", "password": "ncc-1701" },
    { "id": 3, "email": "bender@juice-sh.op", "password": "OhG0dPlease1nsertLiquor!" },
    { "id": 4, "username": "bkimminich", "email": "bjoern.kimminich@gmail.com", "password": "bW9jLmxpYW1nQGhjaW5pbW1pay5ucmVvamI=" }
]"#;

/// Process-local user directory
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Directory pre-filled with the demo accounts
    pub fn demo() -> AppResult<Self> {
        Self::from_seed_json(DEMO_SEED)
    }

    /// Parse a JSON array of `{id, username?, email, password}` records
    pub fn from_seed_json(json: &str) -> AppResult<Self> {
        let seeds: Vec<SeedUser> = serde_json::from_str(json)?;
        let users = seeds
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::internal("Failed to hash seed password").with_source(e))?;
        Ok(Self::new(users))
    }

    /// Load the seed JSON from `path`
    pub fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let repo = Self::from_seed_json(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            users = repo.users.read().len(),
            "Loaded user seed"
        );
        Ok(repo)
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.has_email(email))
            .cloned())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn update_last_login_ip(&self, user_id: UserId, ip: &str) -> AuthResult<Option<User>> {
        let mut users = self.users.write();
        Ok(users.get_mut(&user_id).map(|user| {
            user.record_login_ip(ip);
            user.clone()
        }))
    }
}
