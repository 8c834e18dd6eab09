//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Generate coupon request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCouponRequest {
    /// Percentage, validated against 1-99
    pub discount: u32,
}

/// Generate coupon response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub coupon: String,
}

/// Redeem coupon response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub discount: u8,
}
