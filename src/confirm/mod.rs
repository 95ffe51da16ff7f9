//! Payment confirmation after return from the hosted page.
//!
//! The hosted payment page redirects the customer back to
//! `…/complete?session_id=cs_…`. One [`ConfirmationFlow`] instance handles
//! one such return: it polls the session status once and, when the payment
//! settled, finalizes the order at most once. Finalization failure is logged
//! and swallowed — the displayed outcome follows the payment status alone,
//! so a finalization hiccup never tells a paying customer their payment
//! failed.

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::clients::traits::Payments;
use crate::guard::AttemptGuard;

/// Outcome of a confirmation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationState {
    /// [`ConfirmationFlow::process`] has not run yet.
    Pending,
    /// The return URL carried no session id; nothing was polled.
    NotProcessed,
    /// The session completed; the payment reference is available when the
    /// payment service reported one.
    Succeeded { payment_intent_id: Option<String> },
    /// The session did not complete, or the status poll failed.
    Failed,
}

/// Extracts the `session_id` query parameter from a return URL.
pub fn session_id_from_url(return_url: &str) -> Option<String> {
    let parsed = Url::parse(return_url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "session_id")
        .map(|(_, value)| value.into_owned())
}

/// Resolves one return from the hosted payment page.
pub struct ConfirmationFlow<P> {
    session_id: Option<String>,
    payments: P,
    guard: AttemptGuard,
    state: ConfirmationState,
}

impl<P: Payments> ConfirmationFlow<P> {
    /// Creates a flow for an already-extracted session id.
    pub fn new(session_id: Option<String>, payments: P) -> Self {
        Self {
            session_id,
            payments,
            guard: AttemptGuard::new(),
            state: ConfirmationState::Pending,
        }
    }

    /// Creates a flow straight from the return URL.
    pub fn from_return_url(return_url: &str, payments: P) -> Self {
        Self::new(session_id_from_url(return_url), payments)
    }

    /// Polls the session and finalizes the order, at most once.
    ///
    /// A second call is a no-op returning the existing state.
    #[instrument(skip(self))]
    pub async fn process(&mut self) -> &ConfirmationState {
        let Some(session_id) = self.session_id.clone() else {
            if matches!(self.state, ConfirmationState::Pending) {
                debug!("No session id in return URL");
                self.state = ConfirmationState::NotProcessed;
            }
            return &self.state;
        };

        if !self.guard.begin() {
            debug!("Duplicate confirmation ignored");
            return &self.state;
        }

        let status = match self.payments.session_status(&session_id).await {
            Ok(status) => status,
            Err(error) => {
                warn!(error = %error, "Session status poll failed");
                self.state = ConfirmationState::Failed;
                return &self.state;
            }
        };

        if status.is_complete() && status.is_paid() {
            // Finalization failure must not flip the displayed outcome.
            match self.payments.finalize_order(&session_id).await {
                Ok(confirmation) => {
                    info!(order_id = confirmation.order_id, "Order finalized");
                }
                Err(error) => {
                    warn!(error = %error, "Order finalization failed");
                }
            }
        }

        self.state = if status.is_complete() {
            ConfirmationState::Succeeded {
                payment_intent_id: status.payment_intent_id,
            }
        } else {
            warn!(status = ?status.status, "Payment did not complete");
            ConfirmationState::Failed
        };
        &self.state
    }

    /// The current state without driving the flow.
    pub fn state(&self) -> &ConfirmationState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_session_id_from_return_url() {
        let url = "http://localhost:5173/complete?session_id=cs_test_123";
        assert_eq!(session_id_from_url(url), Some("cs_test_123".to_string()));
    }

    #[test]
    fn ignores_other_query_parameters() {
        let url = "http://localhost:5173/complete?foo=bar&session_id=cs_9&x=1";
        assert_eq!(session_id_from_url(url), Some("cs_9".to_string()));
    }

    #[test]
    fn missing_session_id_yields_none() {
        assert_eq!(
            session_id_from_url("http://localhost:5173/complete"),
            None
        );
        assert_eq!(session_id_from_url("not a url"), None);
    }
}
