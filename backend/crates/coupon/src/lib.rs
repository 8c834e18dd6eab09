//! Coupon Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Coupon entity, value objects, z85 layout services
//! - `application/` - Clock and the coupon codec
//! - `presentation/` - HTTP handlers
//!
//! ## Coupon Model
//! - A coupon is `MONYY-DD` (month, two-digit year, discount) sent as 10
//!   z85 characters
//! - No signature and no checksum: anyone who knows the layout can mint one
//! - Valid through the end of its month; expired and malformed codes are
//!   rejected the same way

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::clock::{Clock, FixedClock, SystemClock};
pub use application::codec::CouponCodec;
pub use domain::value_objects::Discount;
pub use error::{CouponError, CouponResult};
pub use presentation::router::{coupon_router, coupon_router_with_clock};
