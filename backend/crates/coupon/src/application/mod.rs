//! Application Layer
//!
//! Clock abstraction and the coupon codec built on the domain services.

pub mod clock;
pub mod codec;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::CouponCodec;
