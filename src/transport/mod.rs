//! Shared HTTP plumbing for the storefront clients.
//!
//! # Main Components
//!
//! - [`HttpGateway`] - base URL, reqwest client, and optional credential
//! - [`BearerToken`] - the session credential threaded through the system
//! - [`ApiError`] - how transport and upstream failures surface
//!
//! # Testing
//!
//! The flows never touch this module directly; they go through the trait
//! seams in [`crate::clients::traits`], which the mocks in
//! [`crate::clients::mock`] also implement.

pub mod core;

// Re-export core types for convenience
pub use core::*;
