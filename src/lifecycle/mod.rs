//! Wiring and observability for the storefront client.

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use tracing::*;
