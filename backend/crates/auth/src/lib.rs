//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, session registry, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - In-memory user directory
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Email + password login minting an opaque bearer token
//! - Process-lifetime token <-> user registry (no persistence, no revocation)
//! - `whoami` over the `token` cookie
//! - Listing of users with their current token
//! - Recording of the caller's address on the user directory

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::registry::SessionRegistry;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::middleware::{CurrentSession, require_bearer_session};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
