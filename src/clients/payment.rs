//! Client for the payment service.
//!
//! The session status endpoint is public by contract: possession of the
//! session id is the access token, and customers hit it right after being
//! redirected back from the hosted page. Session creation and order
//! finalization authenticate as usual.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::traits::Payments;
use crate::model::{OrderConfirmation, PaymentRequest, PaymentSession, SessionStatus};
use crate::transport::{ApiError, HttpGateway};

/// Client for the hosted payment service.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    gateway: HttpGateway,
}

impl PaymentClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Payments for PaymentClient {
    #[instrument(skip(self, request))]
    async fn create_checkout_session(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, ApiError> {
        debug!(?request, "create_checkout_session called");
        self.gateway
            .send_json(
                self.gateway
                    .post_auth("/payment/create-checkout-session")
                    .json(request),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn session_status(&self, session_id: &str) -> Result<SessionStatus, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json(
                self.gateway
                    .get("/payment/session-status")
                    .query(&[("session_id", session_id)]),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn finalize_order(&self, session_id: &str) -> Result<OrderConfirmation, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json(
                self.gateway
                    .post_auth("/payment/complete-order")
                    .query(&[("session_id", session_id)]),
            )
            .await
    }
}
