//! # Observability & Tracing
//!
//! This module provides the tracing setup for the storefront client.
//!
//! ## Overview
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. Client methods carry `#[instrument]` spans, so a checkout run
//! shows up as a hierarchy: the flow span, then one span per service call
//! underneath it.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact
//! format hides module paths (`with_target(false)`); the span names carry
//! the context instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo test
//!
//! # Show full request payloads at function entry points
//! RUST_LOG=debug cargo test
//!
//! # Filter to the checkout flow only
//! RUST_LOG=bookstore_checkout::checkout=debug cargo test
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO activate: Order created from cart order_id=42
//! INFO activate: Checkout session ready order_id=42 cart_total=15.0
//! ```
//!
//! **With `RUST_LOG=debug`** (detailed):
//!
//! ```text
//! DEBUG activate:fetch_cart: Sending request
//! DEBUG activate: Cart fetched cart_total=15.0 lines=1
//! DEBUG activate:create_order_from_cart: Sending request
//! INFO activate: Order created from cart order_id=42
//! DEBUG activate:create_checkout_session: create_checkout_session called request=PaymentRequest { .. }
//! INFO activate: Checkout session ready order_id=42 cart_total=15.0
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - span names carry the context
        .compact() // Compact format shows spans inline (e.g., "activate:fetch_cart")
        .init();
}
