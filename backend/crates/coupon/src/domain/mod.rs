//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Coupon)
//! - Domain value objects (Month, Validity, Discount)
//! - Domain services (z85 encode/decode of the coupon layout)

pub mod entities;
pub mod services;
pub mod value_objects;
