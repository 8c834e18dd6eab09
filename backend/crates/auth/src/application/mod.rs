//! Application Layer
//!
//! Use cases around the session registry.

pub mod authentication_details;
pub mod config;
pub mod current_user;
pub mod login;
pub mod save_login_ip;

// Re-exports
pub use authentication_details::{AuthenticationDetailsUseCase, UserDetailsOutput};
pub use config::AuthConfig;
pub use current_user::{CurrentUserOutput, CurrentUserUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use save_login_ip::SaveLoginIpUseCase;
