//! Payment session types for the hosted checkout page.
//!
//! The payment processor owns the session; this crate only ever holds the
//! client secret used to mount the hosted form, and later the session status
//! used to decide finalization.

use serde::{Deserialize, Serialize};

use crate::model::cart::CartLine;

/// Request body for creating a hosted checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Always zero on the wire; the gateway resolves the real user from the
    /// bearer token.
    pub user_id: u64,
    pub order_id: u64,
    pub total_amount: f64,
    pub items: Vec<PaymentItem>,
}

impl PaymentRequest {
    /// Builds the session request from an order id, the computed cart total,
    /// and the cart lines the total was computed from.
    pub fn from_cart(order_id: u64, total_amount: f64, lines: &[CartLine]) -> Self {
        Self {
            user_id: 0,
            order_id,
            total_amount,
            items: lines.iter().map(PaymentItem::from_line).collect(),
        }
    }
}

/// One line item of a [`PaymentRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    pub book_id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

impl PaymentItem {
    fn from_line(line: &CartLine) -> Self {
        Self {
            book_id: line.book_id,
            title: line.title.clone(),
            price: line.price.unwrap_or(0.0),
            quantity: line.quantity,
        }
    }
}

/// Handle to a hosted payment session.
///
/// The client secret is opaque to this crate; it is handed to the hosted
/// payment form as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    pub client_secret: String,
}

/// Session status as reported by the payment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub status: SessionState,
    pub payment_status: PaymentState,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

impl SessionStatus {
    /// Whether the hosted session reached its terminal success state.
    pub fn is_complete(&self) -> bool {
        self.status == SessionState::Complete
    }

    /// Whether the payment itself settled.
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentState::Paid
    }
}

/// Lifecycle state of a hosted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Open,
    Complete,
    Expired,
    /// Any status string this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Settlement state of the payment behind a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    Unpaid,
    NoPaymentRequired,
    #[serde(other)]
    Unknown,
}

/// Response of the order finalization endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cart::cart_total;

    #[test]
    fn payment_request_mirrors_cart_lines() {
        let lines = vec![CartLine::new(1, "The Forgotten Chronicles", Some(15.0), 1)];
        let request = PaymentRequest::from_cart(42, cart_total(&lines), &lines);

        assert_eq!(request.user_id, 0);
        assert_eq!(request.order_id, 42);
        assert_eq!(request.total_amount, 15.0);
        assert_eq!(
            request.items,
            vec![PaymentItem {
                book_id: 1,
                title: "The Forgotten Chronicles".to_string(),
                price: 15.0,
                quantity: 1,
            }]
        );
    }

    #[test]
    fn unpriced_lines_become_zero_priced_items() {
        let lines = vec![CartLine::new(3, "Galley Proof", None, 2)];
        let request = PaymentRequest::from_cart(7, 0.0, &lines);
        assert_eq!(request.items[0].price, 0.0);
    }

    #[test]
    fn session_status_decodes_stripe_shape() {
        let status: SessionStatus = serde_json::from_str(
            r#"{"status":"complete","payment_status":"paid","payment_intent_id":"pi_123"}"#,
        )
        .expect("status should decode");
        assert!(status.is_complete());
        assert!(status.is_paid());
        assert_eq!(status.payment_intent_id.as_deref(), Some("pi_123"));
    }

    #[test]
    fn unknown_status_strings_do_not_fail_decoding() {
        let status: SessionStatus =
            serde_json::from_str(r#"{"status":"weird","payment_status":"pending"}"#)
                .expect("status should decode");
        assert_eq!(status.status, SessionState::Unknown);
        assert_eq!(status.payment_status, PaymentState::Unknown);
        assert!(!status.is_complete());
    }
}
