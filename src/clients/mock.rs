//! # Mock Services
//!
//! Expectation-queue mocks for the seams in [`super::traits`], used to test
//! the flows without a gateway.
//!
//! Each mock is a cheap clone over shared state: queue expectations on one
//! handle, move a clone into the flow, then assert with `verify()` and the
//! call counters.
//!
//! # Example
//! ```ignore
//! let carts = MockCarts::new();
//! carts.expect_fetch().return_ok(vec![line]);
//!
//! let mut flow = CheckoutFlow::new(credential, carts.clone(), orders, payments);
//! flow.activate().await;
//! carts.verify(); // Ensures all expectations were consumed
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::clients::traits::{Carts, Orders, Payments};
use crate::model::{CartLine, OrderConfirmation, PaymentRequest, PaymentSession, SessionStatus};
use crate::transport::ApiError;

// =============================================================================
// CART MOCK
// =============================================================================

/// Mock implementation of [`Carts`].
#[derive(Clone, Default)]
pub struct MockCarts {
    inner: Arc<CartsInner>,
}

#[derive(Default)]
struct CartsInner {
    responses: Mutex<VecDeque<Result<Vec<CartLine>, ApiError>>>,
    calls: AtomicUsize,
}

impl MockCarts {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next `fetch_cart` call.
    pub fn expect_fetch(&self) -> FetchCartExpectation {
        FetchCartExpectation {
            inner: self.inner.clone(),
        }
    }

    /// How many times `fetch_cart` was invoked.
    pub fn fetch_calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.inner.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all cart expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for a `fetch_cart` expectation.
pub struct FetchCartExpectation {
    inner: Arc<CartsInner>,
}

impl FetchCartExpectation {
    pub fn return_ok(self, lines: Vec<CartLine>) {
        self.inner.responses.lock().unwrap().push_back(Ok(lines));
    }

    pub fn return_err(self, error: ApiError) {
        self.inner.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl Carts for MockCarts {
    async fn fetch_cart(&self) -> Result<Vec<CartLine>, ApiError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected fetch_cart call"))
    }
}

// =============================================================================
// ORDER MOCK
// =============================================================================

/// Mock implementation of [`Orders`].
#[derive(Clone, Default)]
pub struct MockOrders {
    inner: Arc<OrdersInner>,
}

#[derive(Default)]
struct OrdersInner {
    responses: Mutex<VecDeque<Result<u64, ApiError>>>,
    calls: AtomicUsize,
}

impl MockOrders {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next `create_order_from_cart` call.
    pub fn expect_create(&self) -> CreateOrderExpectation {
        CreateOrderExpectation {
            inner: self.inner.clone(),
        }
    }

    /// How many times `create_order_from_cart` was invoked.
    pub fn create_calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.inner.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all order expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for a `create_order_from_cart` expectation.
pub struct CreateOrderExpectation {
    inner: Arc<OrdersInner>,
}

impl CreateOrderExpectation {
    pub fn return_ok(self, order_id: u64) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(order_id));
    }

    pub fn return_err(self, error: ApiError) {
        self.inner.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl Orders for MockOrders {
    async fn create_order_from_cart(&self) -> Result<u64, ApiError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected create_order_from_cart call"))
    }
}

// =============================================================================
// PAYMENT MOCK
// =============================================================================

/// Mock implementation of [`Payments`].
///
/// Besides queued responses, the mock records the requests it received so
/// tests can assert on the exact session payload and session ids.
#[derive(Clone, Default)]
pub struct MockPayments {
    inner: Arc<PaymentsInner>,
}

#[derive(Default)]
struct PaymentsInner {
    sessions: Mutex<VecDeque<Result<PaymentSession, ApiError>>>,
    statuses: Mutex<VecDeque<Result<SessionStatus, ApiError>>>,
    finalizations: Mutex<VecDeque<Result<OrderConfirmation, ApiError>>>,
    session_requests: Mutex<Vec<PaymentRequest>>,
    status_requests: Mutex<Vec<String>>,
    finalize_requests: Mutex<Vec<String>>,
}

impl MockPayments {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next `create_checkout_session` call.
    pub fn expect_create_session(&self) -> CreateSessionExpectation {
        CreateSessionExpectation {
            inner: self.inner.clone(),
        }
    }

    /// Queues the response for the next `session_status` call.
    pub fn expect_status(&self) -> StatusExpectation {
        StatusExpectation {
            inner: self.inner.clone(),
        }
    }

    /// Queues the response for the next `finalize_order` call.
    pub fn expect_finalize(&self) -> FinalizeExpectation {
        FinalizeExpectation {
            inner: self.inner.clone(),
        }
    }

    /// Every session request received, in call order.
    pub fn session_requests(&self) -> Vec<PaymentRequest> {
        self.inner.session_requests.lock().unwrap().clone()
    }

    /// Every session id polled, in call order.
    pub fn status_requests(&self) -> Vec<String> {
        self.inner.status_requests.lock().unwrap().clone()
    }

    /// Every session id finalized, in call order.
    pub fn finalize_requests(&self) -> Vec<String> {
        self.inner.finalize_requests.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.inner.session_requests.lock().unwrap().len()
    }

    pub fn status_calls(&self) -> usize {
        self.inner.status_requests.lock().unwrap().len()
    }

    pub fn finalize_calls(&self) -> usize {
        self.inner.finalize_requests.lock().unwrap().len()
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.inner.sessions.lock().unwrap().len()
            + self.inner.statuses.lock().unwrap().len()
            + self.inner.finalizations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all payment expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for a `create_checkout_session` expectation.
pub struct CreateSessionExpectation {
    inner: Arc<PaymentsInner>,
}

impl CreateSessionExpectation {
    pub fn return_ok(self, session: PaymentSession) {
        self.inner.sessions.lock().unwrap().push_back(Ok(session));
    }

    pub fn return_err(self, error: ApiError) {
        self.inner.sessions.lock().unwrap().push_back(Err(error));
    }
}

/// Builder for a `session_status` expectation.
pub struct StatusExpectation {
    inner: Arc<PaymentsInner>,
}

impl StatusExpectation {
    pub fn return_ok(self, status: SessionStatus) {
        self.inner.statuses.lock().unwrap().push_back(Ok(status));
    }

    pub fn return_err(self, error: ApiError) {
        self.inner.statuses.lock().unwrap().push_back(Err(error));
    }
}

/// Builder for a `finalize_order` expectation.
pub struct FinalizeExpectation {
    inner: Arc<PaymentsInner>,
}

impl FinalizeExpectation {
    pub fn return_ok(self, confirmation: OrderConfirmation) {
        self.inner
            .finalizations
            .lock()
            .unwrap()
            .push_back(Ok(confirmation));
    }

    pub fn return_err(self, error: ApiError) {
        self.inner
            .finalizations
            .lock()
            .unwrap()
            .push_back(Err(error));
    }
}

#[async_trait]
impl Payments for MockPayments {
    async fn create_checkout_session(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, ApiError> {
        self.inner
            .session_requests
            .lock()
            .unwrap()
            .push(request.clone());
        self.inner
            .sessions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected create_checkout_session call"))
    }

    async fn session_status(&self, session_id: &str) -> Result<SessionStatus, ApiError> {
        self.inner
            .status_requests
            .lock()
            .unwrap()
            .push(session_id.to_string());
        self.inner
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected session_status call"))
    }

    async fn finalize_order(&self, session_id: &str) -> Result<OrderConfirmation, ApiError> {
        self.inner
            .finalize_requests
            .lock()
            .unwrap()
            .push(session_id.to_string());
        self.inner
            .finalizations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected finalize_order call"))
    }
}
