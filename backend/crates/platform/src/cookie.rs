//! Cookie Handling
//!
//! Reading the token cookie the browser sends back, and building the
//! `Set-Cookie` value handed out at login.

use http::HeaderValue;

use crate::header::HeaderCarrier;

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
///
/// The token cookie is read by the browser client as well, so it is not
/// `HttpOnly` by default.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            secure: true,
            http_only: false,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Build a `Set-Cookie` value for `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, value),
            format!("Path={}", self.path),
            format!("SameSite={}", self.same_site.as_str()),
        ];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }

    /// `Set-Cookie` as a header value; `None` if `value` holds bytes a header can't carry
    pub fn set_cookie_header(&self, value: &str) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.build_set_cookie(value)).ok()
    }
}

/// Extract a cookie value from the `Cookie` header
pub fn extract_cookie<'a, C: HeaderCarrier + ?Sized>(carrier: &'a C, name: &str) -> Option<&'a str> {
    carrier
        .header(http::header::COOKIE.as_str())?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then_some(value)
        })
}
