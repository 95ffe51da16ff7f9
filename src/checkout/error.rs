//! Error types for the checkout flow.

use thiserror::Error;

use crate::transport::ApiError;

/// Errors that can end a checkout activation.
///
/// Display strings are user-facing: the flow collapses any of these into
/// [`CheckoutState::Failed`](super::CheckoutState::Failed) verbatim.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No credential was supplied at activation; nothing was called.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The cart had no lines, so there is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// An upstream call failed; the message carries the server's wording
    /// where it provided one.
    #[error(transparent)]
    Api(#[from] ApiError),
}
