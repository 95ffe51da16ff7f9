use bookstore_checkout::checkout::{CheckoutFlow, CheckoutState};
use bookstore_checkout::clients::mock::{MockCarts, MockOrders, MockPayments};
use bookstore_checkout::model::{CartLine, PaymentItem, PaymentSession};
use bookstore_checkout::transport::{ApiError, BearerToken};

fn credential() -> Option<BearerToken> {
    Some(BearerToken::new("jwt-token"))
}

fn upstream_error(message: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        message: message.to_string(),
    }
}

/// End-to-end happy path over mocked services: a one-line cart becomes an
/// order and then a payment session carrying the same line and total.
#[tokio::test]
async fn test_checkout_happy_path() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts.expect_fetch().return_ok(vec![CartLine::new(
        1,
        "The Forgotten Chronicles",
        Some(15.0),
        1,
    )]);
    orders.expect_create().return_ok(42);
    payments.expect_create_session().return_ok(PaymentSession {
        client_secret: "cs_secret".to_string(),
    });

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    let state = flow.activate().await.clone();

    match state {
        CheckoutState::Ready {
            session,
            cart_total,
        } => {
            assert_eq!(session.client_secret, "cs_secret");
            assert_eq!(cart_total, 15.0);
        }
        other => panic!("Expected Ready, got {other:?}"),
    }

    // The session request mirrors the cart exactly.
    let requests = payments.session_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
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

    carts.verify();
    orders.verify();
    payments.verify();
}

/// Duplicate activation must not repeat any side effect: one cart fetch,
/// one order, one session, and an unchanged state.
#[tokio::test]
async fn test_duplicate_activation_is_a_noop() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts
        .expect_fetch()
        .return_ok(vec![CartLine::new(3, "Night Trains", Some(9.5), 2)]);
    orders.expect_create().return_ok(7);
    payments.expect_create_session().return_ok(PaymentSession {
        client_secret: "cs_once".to_string(),
    });

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );

    let first = flow.activate().await.clone();
    let second = flow.activate().await.clone();

    assert_eq!(first, second, "Second activation must leave state untouched");
    assert_eq!(carts.fetch_calls(), 1);
    assert_eq!(orders.create_calls(), 1);
    assert_eq!(payments.create_calls(), 1);
}

/// A failed first activation is terminal too: re-activating does not retry.
#[tokio::test]
async fn test_failed_activation_is_not_retried() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts
        .expect_fetch()
        .return_err(upstream_error("cart service down"));

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );

    let first = flow.activate().await.clone();
    assert_eq!(first, CheckoutState::Failed("cart service down".to_string()));

    let second = flow.activate().await.clone();
    assert_eq!(first, second);
    assert_eq!(carts.fetch_calls(), 1);
}

/// An empty cart short-circuits before any order or session is created.
#[tokio::test]
async fn test_empty_cart_short_circuit() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts.expect_fetch().return_ok(vec![]);

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    let state = flow.activate().await.clone();

    assert_eq!(state, CheckoutState::Failed("Cart is empty".to_string()));
    assert_eq!(orders.create_calls(), 0);
    assert_eq!(payments.create_calls(), 0);
    carts.verify();
}

/// Without a credential nothing is called at all, and the attempt is not
/// consumed.
#[tokio::test]
async fn test_missing_credential_short_circuit() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    let mut flow = CheckoutFlow::new(None, carts.clone(), orders.clone(), payments.clone());
    let state = flow.activate().await.clone();

    assert_eq!(
        state,
        CheckoutState::Failed("Not authenticated".to_string())
    );
    assert_eq!(carts.fetch_calls(), 0);
    assert_eq!(orders.create_calls(), 0);
    assert_eq!(payments.create_calls(), 0);
    assert!(!flow.attempted(), "Auth check must not consume the attempt");
}

/// Order creation failure stops the pipeline before session creation.
#[tokio::test]
async fn test_order_failure_stops_before_session() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts
        .expect_fetch()
        .return_ok(vec![CartLine::new(5, "Atlas of Tides", Some(30.0), 1)]);
    orders
        .expect_create()
        .return_err(upstream_error("Order service unavailable"));

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    let state = flow.activate().await.clone();

    assert_eq!(
        state,
        CheckoutState::Failed("Order service unavailable".to_string())
    );
    assert_eq!(payments.create_calls(), 0);
}

/// Cart fetch failure stops the pipeline before order creation.
#[tokio::test]
async fn test_cart_failure_stops_before_order() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts.expect_fetch().return_err(upstream_error("boom"));

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    flow.activate().await;

    assert_eq!(orders.create_calls(), 0);
    assert_eq!(payments.create_calls(), 0);
}

/// Session creation failure surfaces the upstream message verbatim.
#[tokio::test]
async fn test_session_failure_surfaces_message() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts
        .expect_fetch()
        .return_ok(vec![CartLine::new(8, "Field Notes", Some(4.25), 4)]);
    orders.expect_create().return_ok(11);
    payments
        .expect_create_session()
        .return_err(upstream_error("Stripe API error: rate limited"));

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    let state = flow.activate().await.clone();

    assert_eq!(
        state,
        CheckoutState::Failed("Stripe API error: rate limited".to_string())
    );
}

/// Unpriced lines count as zero toward the total but still appear as items.
#[tokio::test]
async fn test_unpriced_lines_total_as_zero() {
    let carts = MockCarts::new();
    let orders = MockOrders::new();
    let payments = MockPayments::new();

    carts.expect_fetch().return_ok(vec![
        CartLine::new(1, "Priced", Some(10.0), 2),
        CartLine::new(2, "Unpriced", None, 3),
    ]);
    orders.expect_create().return_ok(99);
    payments.expect_create_session().return_ok(PaymentSession {
        client_secret: "cs_zero".to_string(),
    });

    let mut flow = CheckoutFlow::new(
        credential(),
        carts.clone(),
        orders.clone(),
        payments.clone(),
    );
    let state = flow.activate().await.clone();

    match state {
        CheckoutState::Ready { cart_total, .. } => assert_eq!(cart_total, 20.0),
        other => panic!("Expected Ready, got {other:?}"),
    }

    let request = &payments.session_requests()[0];
    assert_eq!(request.total_amount, 20.0);
    assert_eq!(request.items.len(), 2);
    assert_eq!(request.items[1].price, 0.0);
}
