//! Infrastructure Layer
//!
//! User directory implementations.

pub mod memory;

pub use memory::InMemoryUserRepository;
