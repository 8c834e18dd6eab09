//! Coupon Router

use crate::application::clock::{Clock, SystemClock};
use crate::application::codec::CouponCodec;
use crate::presentation::handlers::{self, CouponAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the coupon router on the host clock
pub fn coupon_router() -> Router {
    coupon_router_with_clock(SystemClock)
}

/// Create a coupon router for any clock implementation
pub fn coupon_router_with_clock<C>(clock: C) -> Router
where
    C: Clock + 'static,
{
    let state = CouponAppState {
        codec: Arc::new(CouponCodec::with_clock(clock)),
    };

    Router::new()
        .route("/", post(handlers::generate_coupon::<C>))
        .route("/{code}", get(handlers::redeem_coupon::<C>))
        .with_state(state)
}
