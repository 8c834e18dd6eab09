//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Header access behind a narrow [`header::HeaderCarrier`] trait
//! - Bearer token / cookie / client IP extraction
//! - Argon2id password hashing and opaque token minting
//! - Z85 binary-to-text codec (used by coupon codes)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod header;
pub mod password;
pub mod z85;
