//! Presentation Layer
//!
//! HTTP handlers and DTOs for the API.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CouponAppState;
pub use router::{coupon_router, coupon_router_with_clock};
