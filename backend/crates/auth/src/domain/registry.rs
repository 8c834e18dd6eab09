//! Session Registry
//!
//! In-memory, bidirectional index between bearer tokens and the user
//! snapshot taken at login.
//!
//! ## Semantics
//! - `put` is last-write-wins per token *and* per user id.
//! - The reverse index (user id -> token) is never pruned. A superseded
//!   token stays resolvable through [`SessionRegistry::get`] and keeps
//!   returning its stale snapshot until the token itself is overwritten.
//! - Nothing is ever removed; entries live as long as the registry.
//! - Every lookup miss is `None`, never a placeholder user.
//!
//! Tokens are issued elsewhere (the login use case); the registry only
//! indexes them.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use platform::header::{HeaderCarrier, bearer_token, unquote};

use crate::domain::entity::authenticated_user::AuthenticatedUser;
use crate::domain::value_object::user_id::{UserId, UserIdentity};

#[derive(Default)]
struct Index {
    by_token: HashMap<String, Arc<AuthenticatedUser>>,
    by_user: HashMap<UserId, String>,
}

/// Token <-> user index shared by every handler
///
/// Build one per process and hand it around in an `Arc`.
#[derive(Default)]
pub struct SessionRegistry {
    index: RwLock<Index>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `token` with `user` and make it the user's current token
    pub fn put(&self, token: impl Into<String>, user: impl Into<Arc<AuthenticatedUser>>) {
        let token = token.into();
        let user = user.into();
        let user_id = user.id;

        // Both maps under one write guard
        let mut index = self.index.write();
        let previous = index.by_user.insert(user_id, token.clone());
        index.by_token.insert(token, user);
        drop(index);

        match previous {
            Some(_) => tracing::debug!(user_id = %user_id, "Session token superseded"),
            None => tracing::debug!(user_id = %user_id, "Session token registered"),
        }
    }

    /// User snapshot for `token`
    ///
    /// One pair of surrounding double quotes is stripped first, since
    /// cookie values may arrive quoted.
    pub fn get(&self, token: &str) -> Option<Arc<AuthenticatedUser>> {
        let token = unquote(token);
        if token.is_empty() {
            return None;
        }
        self.index.read().by_token.get(token).cloned()
    }

    /// Current token of `user`, if it ever logged in
    pub fn token_of<I: UserIdentity + ?Sized>(&self, user: &I) -> Option<String> {
        self.index.read().by_user.get(&user.user_id()).cloned()
    }

    /// Resolve the `Authorization: Bearer <token>` header of a request-like value
    pub fn from_carrier<C: HeaderCarrier + ?Sized>(
        &self,
        carrier: &C,
    ) -> Option<Arc<AuthenticatedUser>> {
        bearer_token(carrier).and_then(|token| self.get(token))
    }

    /// Number of tokens ever registered (superseded ones included)
    pub fn len(&self) -> usize {
        self.index.read().by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
