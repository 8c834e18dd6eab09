//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie the token is handed out in (and read back from by `whoami`)
    pub token_cookie: CookieConfig,
    /// Random bytes per minted token
    pub token_bytes: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie: CookieConfig::default(),
            token_bytes: 32,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::default();
        config.token_cookie.secure = false;
        config
    }

    /// Name of the token cookie
    pub fn cookie_name(&self) -> &str {
        &self.token_cookie.name
    }
}
