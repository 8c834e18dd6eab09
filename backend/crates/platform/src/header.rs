//! Header Access
//!
//! The session core only ever needs to read a header by name, so request
//! types are reached through [`HeaderCarrier`] instead of a framework type.

use std::collections::HashMap;
use std::hash::BuildHasher;

use http::{HeaderMap, Request, request};

/// Scheme expected in front of a bearer token (case-sensitive)
pub const BEARER_SCHEME: &str = "Bearer";

/// Anything a header value can be read from
pub trait HeaderCarrier {
    /// Value of the header `name`, if present and valid UTF-8
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderCarrier for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)?.to_str().ok()
    }
}

impl<B> HeaderCarrier for Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().header(name)
    }
}

impl HeaderCarrier for request::Parts {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.header(name)
    }
}

/// Plain maps match keys exactly; use lowercase names like `HeaderMap` does.
impl<S: BuildHasher> HeaderCarrier for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<C: HeaderCarrier + ?Sized> HeaderCarrier for &C {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The value must be exactly two space-separated parts and the scheme
/// must be spelled `Bearer`.
pub fn bearer_token<C: HeaderCarrier + ?Sized>(carrier: &C) -> Option<&str> {
    let value = carrier.header(http::header::AUTHORIZATION.as_str())?;
    let mut parts = value.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Strip one matching pair of surrounding double quotes
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderValue, header};

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token() {
        let headers = headers_with_authorization("Bearer 11111");
        assert_eq!(bearer_token(&headers), Some("11111"));
    }

    #[test]
    fn test_bearer_token_rejects_other_shapes() {
        assert_eq!(bearer_token(&headers_with_authorization("bearer 11111")), None);
        assert_eq!(bearer_token(&headers_with_authorization("Basic 11111")), None);
        assert_eq!(bearer_token(&headers_with_authorization("Bearer")), None);
        assert_eq!(bearer_token(&headers_with_authorization("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with_authorization("Bearer a b")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_from_request_and_map() {
        let request = Request::builder()
            .header("authorization", "Bearer abc")
            .body(())
            .unwrap();
        assert_eq!(bearer_token(&request), Some("abc"));

        let (parts, _) = request.into_parts();
        assert_eq!(bearer_token(&parts), Some("abc"));

        let mut map = HashMap::new();
        map.insert("authorization".to_string(), "Bearer xyz".to_string());
        assert_eq!(bearer_token(&map), Some("xyz"));
        assert_eq!(bearer_token(&HashMap::<String, String>::new()), None);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"token\""), "token");
        assert_eq!(unquote("token"), "token");
        assert_eq!(unquote("\"token"), "\"token");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\"\"a\"\""), "\"a\"");
    }
}
