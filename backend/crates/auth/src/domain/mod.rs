//! Domain Layer
//!
//! Contains entities, value objects, the session registry and repository traits.

pub mod entity;
pub mod registry;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{authenticated_user::AuthenticatedUser, user::User};
pub use registry::SessionRegistry;
pub use repository::UserRepository;
pub use value_object::user_id::{UserId, UserIdentity};
