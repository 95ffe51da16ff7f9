#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Bookstore Checkout
//!
//! > **Typed clients and checkout orchestration for a bookstore storefront.**
//!
//! This crate is the client side of a bookstore shop: typed bindings for the
//! storefront's REST gateway (catalog, cart, addresses, orders, auth) and the
//! checkout orchestration flow that turns a cart into a hosted payment
//! session and, after the customer returns from the payment page, confirms
//! the outcome and finalizes the order.
//!
//! ## 🚀 Core Concepts
//!
//! ### One activation, one attempt
//! Checkout is a linear pipeline: fetch the cart, create an order from it,
//! create a hosted payment session for that order. Each step depends on the
//! previous result, so the calls are strictly sequential. A
//! [`guard::AttemptGuard`] latch makes the pipeline run at most once per
//! [`checkout::CheckoutFlow`] instance, even if activation is triggered
//! twice in quick succession. The same latch protects order finalization in
//! [`confirm::ConfirmationFlow`].
//!
//! The latch is local to the process. It does not protect against a true
//! double submit from two independent sessions; that would need a
//! server-side idempotency key.
//!
//! ### Explicit outcomes
//! Both flows expose their result as an exhaustive tagged state —
//! [`checkout::CheckoutState`] and [`confirm::ConfirmationState`] — rather
//! than a bag of nullable fields. Callers match on the state; there is no
//! "check a type string" escape hatch.
//!
//! ### Seams for testing
//! The orchestrator only sees the three traits in [`clients::traits`]
//! ([`Carts`](clients::Carts), [`Orders`](clients::Orders),
//! [`Payments`](clients::Payments)). The HTTP clients implement them for
//! production; [`clients::mock`] provides expectation-queue mocks so the
//! flow logic is testable without a server.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`transport`])
//! The shared HTTP plumbing. [`HttpGateway`](transport::HttpGateway) owns
//! the base URL, the reqwest client, and the optional bearer credential, and
//! maps responses into [`ApiError`](transport::ApiError).
//!
//! ### 2. The Interface ([`clients`])
//! One thin typed client per storefront service, all wrapping the gateway:
//! auth, catalog, cart, addresses, orders, payment.
//!
//! ### 3. The Flows ([`checkout`], [`confirm`])
//! The state machines. [`CheckoutFlow`](checkout::CheckoutFlow) drives
//! cart → order → session; [`ConfirmationFlow`](confirm::ConfirmationFlow)
//! polls the session status on return and finalizes the order when payment
//! succeeded.
//!
//! ### 4. The Wiring ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) builds the gateway from
//! [`config::Config`], hands out clients, and constructs flows bound to the
//! current credential. [`lifecycle::setup_tracing`] installs the log
//! subscriber.
//!
//! ## Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod checkout;
pub mod clients;
pub mod config;
pub mod confirm;
pub mod guard;
pub mod lifecycle;
pub mod model;
pub mod transport;
