//! UserId Value Object
//!
//! Integer primary key of a shop user. It is the key of the session
//! registry's reverse index, so anything that can name a user implements
//! [`UserIdentity`].

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Something that exposes a stable user identifier
pub trait UserIdentity {
    fn user_id(&self) -> UserId;
}

impl UserIdentity for UserId {
    fn user_id(&self) -> UserId {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display_and_serde() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<UserId>("7").unwrap(), UserId::from(7));
    }

    #[test]
    fn test_user_id_is_its_own_identity() {
        assert_eq!(UserId::new(3).user_id().get(), 3);
    }
}
