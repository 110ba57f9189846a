//! # relay_core
//!
//! Core domain logic for Relay.

pub mod message;
pub mod normalize;
pub mod webhook;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
