//! Coupon Codec
//!
//! Generates coupon codes for the current month and resolves codes back to
//! a discount while they are still valid.
//!
//! ## Semantics
//! - Only month and two-digit year of the issuing date are encoded, so every
//!   code generated within one calendar month is identical.
//! - A code is valid through the last day of its month. The two-digit year
//!   is read in the century of today.
//! - Expired and malformed codes are indistinguishable to callers.

use chrono::{Datelike, NaiveDate};

use crate::application::clock::{Clock, SystemClock};
use crate::domain::entities::Coupon;
use crate::domain::services::{decode_coupon, encode_coupon};
use crate::domain::value_objects::{Discount, Validity};

pub struct CouponCodec<C = SystemClock> {
    clock: C,
}

impl CouponCodec<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for CouponCodec<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CouponCodec<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Code for `discount`, valid through the end of the current month
    pub fn generate(&self, discount: Discount) -> String {
        self.generate_at(discount, &self.clock.today())
    }

    /// Code for `discount`, valid through the end of the month of `date`
    pub fn generate_at<D: Datelike>(&self, discount: Discount, date: &D) -> String {
        encode_coupon(&Coupon::new(Validity::from_date(date), discount))
    }

    /// Discount of a code that has not expired yet
    pub fn discount_from(&self, code: &str) -> Option<Discount> {
        self.discount_at(code, self.clock.today())
    }

    /// Discount of `code` as seen on `today`
    pub fn discount_at(&self, code: &str, today: NaiveDate) -> Option<Discount> {
        let coupon = decode_coupon(code)?;
        if coupon.validity.is_expired_at(today) {
            return None;
        }
        Some(coupon.discount)
    }
}
