//! Coupon Error Types
//!
//! Coupon-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Coupon-specific result type alias
pub type CouponResult<T> = Result<T, CouponError>;

#[derive(Debug, Error)]
pub enum CouponError {
    /// Malformed, tampered with, or expired
    #[error("Invalid coupon.")]
    InvalidCoupon,

    /// Requested discount outside 1-99
    #[error("Discount must be between 1 and 99, got {0}")]
    InvalidDiscount(u32),
}

impl CouponError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CouponError::InvalidCoupon => StatusCode::NOT_FOUND,
            CouponError::InvalidDiscount(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CouponError::InvalidCoupon => ErrorKind::NotFound,
            CouponError::InvalidDiscount(_) => ErrorKind::BadRequest,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CouponError::InvalidCoupon => tracing::info!("Invalid coupon redeemed"),
            CouponError::InvalidDiscount(discount) => {
                tracing::debug!(discount, "Rejected coupon discount")
            }
        }
    }
}

impl From<CouponError> for AppError {
    fn from(err: CouponError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for CouponError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Shop clients match on this exact plain-text body
            CouponError::InvalidCoupon => (
                self.status_code(),
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response(),
            CouponError::InvalidDiscount(_) => AppError::from(self).into_response(),
        }
    }
}
