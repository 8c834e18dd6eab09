//! Shared Kernel - vocabulary shared by every backend crate
//!
//! This crate only carries things whose meaning is identical across the
//! session and coupon domains:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Conversions from I/O and JSON errors into `AppError`
//!
//! Core lookups (session registry, coupon decode) never fail: they return
//! `Option`. Each crate's error type turns an absent value into an HTTP
//! rejection at the edge and renders through `AppError`.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
