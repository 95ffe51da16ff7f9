//! The checkout orchestration flow.
//!
//! One [`CheckoutFlow`] instance corresponds to one activation of the
//! checkout view. On activation it runs the pipeline
//! cart → order → payment session exactly once and lands in a terminal
//! [`CheckoutState`]: `Ready` with the session handle, or `Failed` with a
//! user-facing message. There is no retry; a fresh activation means a fresh
//! instance.

pub mod error;

pub use error::*;

use tracing::{debug, info, instrument, warn};

use crate::clients::traits::{Carts, Orders, Payments};
use crate::guard::AttemptGuard;
use crate::model::{cart_total, PaymentRequest, PaymentSession};
use crate::transport::BearerToken;

/// Where a checkout activation currently stands.
///
/// Matched exhaustively by callers; `Failed` and `Ready` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// The pipeline has not finished yet (or never started).
    Loading,
    /// The activation ended without a session; the message is ready to show.
    Failed(String),
    /// The hosted payment form can be mounted with this session.
    Ready {
        session: PaymentSession,
        cart_total: f64,
    },
}

/// Drives one checkout activation over the three service seams.
///
/// The credential is an explicit constructor argument; a flow built without
/// one fails fast as unauthenticated and performs no network calls.
pub struct CheckoutFlow<C, O, P> {
    credential: Option<BearerToken>,
    carts: C,
    orders: O,
    payments: P,
    guard: AttemptGuard,
    state: CheckoutState,
}

impl<C, O, P> CheckoutFlow<C, O, P>
where
    C: Carts,
    O: Orders,
    P: Payments,
{
    /// Creates an idle flow; nothing is called until [`Self::activate`].
    pub fn new(credential: Option<BearerToken>, carts: C, orders: O, payments: P) -> Self {
        Self {
            credential,
            carts,
            orders,
            payments,
            guard: AttemptGuard::new(),
            state: CheckoutState::Loading,
        }
    }

    /// Runs the pipeline at most once and returns the resulting state.
    ///
    /// A second call is a no-op: no requests are issued and the existing
    /// state is returned unchanged. Exactly one order and one payment
    /// session are created per successful activation.
    #[instrument(skip(self))]
    pub async fn activate(&mut self) -> &CheckoutState {
        if self.credential.is_none() {
            // The credential check stays ahead of the latch: an activation
            // without a token must not consume the single attempt.
            if matches!(self.state, CheckoutState::Loading) {
                warn!("Checkout activated without a credential");
                self.state = CheckoutState::Failed(CheckoutError::NotAuthenticated.to_string());
            }
            return &self.state;
        }

        if !self.guard.begin() {
            debug!("Duplicate activation ignored");
            return &self.state;
        }

        match self.run().await {
            Ok(state) => self.state = state,
            Err(error) => {
                warn!(error = %error, "Checkout failed");
                self.state = CheckoutState::Failed(error.to_string());
            }
        }
        &self.state
    }

    /// The current state without driving the flow.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether the single activation attempt has been used.
    pub fn attempted(&self) -> bool {
        self.guard.attempted()
    }

    async fn run(&self) -> Result<CheckoutState, CheckoutError> {
        let lines = self.carts.fetch_cart().await?;
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let cart_total = cart_total(&lines);
        debug!(cart_total, lines = lines.len(), "Cart fetched");

        let order_id = self.orders.create_order_from_cart().await?;
        info!(order_id, "Order created from cart");

        let request = PaymentRequest::from_cart(order_id, cart_total, &lines);
        let session = self.payments.create_checkout_session(&request).await?;
        info!(order_id, cart_total, "Checkout session ready");

        Ok(CheckoutState::Ready {
            session,
            cart_total,
        })
    }
}
