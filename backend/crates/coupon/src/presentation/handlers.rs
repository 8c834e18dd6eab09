//! HTTP Handlers

use crate::application::clock::Clock;
use crate::application::codec::CouponCodec;
use crate::domain::value_objects::Discount;
use crate::error::{CouponError, CouponResult};
use crate::presentation::dto::{CouponResponse, DiscountResponse, GenerateCouponRequest};
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

/// Shared state for coupon handlers
pub struct CouponAppState<C>
where
    C: Clock + 'static,
{
    pub codec: Arc<CouponCodec<C>>,
}

impl<C> Clone for CouponAppState<C>
where
    C: Clock + 'static,
{
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
        }
    }
}

/// POST /rest/coupon
pub async fn generate_coupon<C>(
    State(state): State<CouponAppState<C>>,
    Json(req): Json<GenerateCouponRequest>,
) -> CouponResult<Json<CouponResponse>>
where
    C: Clock + 'static,
{
    let discount = Discount::try_from(req.discount).map_err(CouponError::InvalidDiscount)?;
    let coupon = state.codec.generate(discount);

    tracing::info!(discount = discount.percent(), "Coupon generated");

    Ok(Json(CouponResponse { coupon }))
}

/// GET /rest/coupon/{code}
pub async fn redeem_coupon<C>(
    State(state): State<CouponAppState<C>>,
    Path(code): Path<String>,
) -> CouponResult<Json<DiscountResponse>>
where
    C: Clock + 'static,
{
    let discount = state
        .codec
        .discount_from(&code)
        .ok_or(CouponError::InvalidCoupon)?;

    tracing::debug!(discount = discount.percent(), "Coupon redeemed");

    Ok(Json(DiscountResponse {
        discount: discount.percent(),
    }))
}
