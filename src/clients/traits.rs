//! Service seams the orchestration flows depend on.
//!
//! [`CheckoutFlow`](crate::checkout::CheckoutFlow) and
//! [`ConfirmationFlow`](crate::confirm::ConfirmationFlow) are generic over
//! these traits, so flow logic is tested against the mocks in
//! [`super::mock`] while production wiring uses the HTTP clients.

use async_trait::async_trait;

use crate::model::{CartLine, OrderConfirmation, PaymentRequest, PaymentSession, SessionStatus};
use crate::transport::ApiError;

/// Read access to the shopper's cart.
#[async_trait]
pub trait Carts: Send + Sync {
    /// Fetches the current cart contents.
    async fn fetch_cart(&self) -> Result<Vec<CartLine>, ApiError>;
}

/// Order creation on behalf of the authenticated shopper.
#[async_trait]
pub trait Orders: Send + Sync {
    /// Persists the current cart as an order and returns its id.
    async fn create_order_from_cart(&self) -> Result<u64, ApiError>;
}

/// The hosted payment service.
#[async_trait]
pub trait Payments: Send + Sync {
    /// Creates a hosted payment session for an order.
    async fn create_checkout_session(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, ApiError>;

    /// Reads the status of an existing session.
    async fn session_status(&self, session_id: &str) -> Result<SessionStatus, ApiError>;

    /// Marks the order behind a paid session as complete.
    async fn finalize_order(&self, session_id: &str) -> Result<OrderConfirmation, ApiError>;
}
