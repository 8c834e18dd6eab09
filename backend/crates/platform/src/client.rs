//! Client identification utilities
//!
//! Works out which address a request claims to come from.

use std::net::IpAddr;

use crate::header::HeaderCarrier;

/// Header set by CDNs in front of the shop
pub const TRUE_CLIENT_IP_HEADER: &str = "true-client-ip";

/// Header set by reverse proxies
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Determine the client address of a request
///
/// Precedence:
/// 1. `True-Client-IP`, taken verbatim (it is recorded as-is, not parsed)
/// 2. first hop of `X-Forwarded-For`, if it parses as an IP address
/// 3. the socket peer address
///
/// ## Returns
/// The address as a string, or `None` if nothing is known
pub fn extract_client_ip<C: HeaderCarrier + ?Sized>(
    carrier: &C,
    direct_ip: Option<IpAddr>,
) -> Option<String> {
    if let Some(true_client_ip) = carrier.header(TRUE_CLIENT_IP_HEADER) {
        return Some(true_client_ip.to_string());
    }

    let forwarded = carrier
        .header(FORWARDED_FOR_HEADER)
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    forwarded.or(direct_ip).map(|ip| ip.to_string())
}
