//! Storefront wiring: one gateway, many clients, flows on demand.

use std::time::Duration;

use tracing::info;

use crate::checkout::CheckoutFlow;
use crate::clients::{
    AddressClient, AuthClient, CartClient, CatalogClient, OrderClient, PaymentClient,
};
use crate::config::Config;
use crate::confirm::ConfirmationFlow;
use crate::transport::{ApiError, BearerToken, HttpGateway};

/// The entry point for applications using this crate.
///
/// `Storefront` owns the [`HttpGateway`] and hands out clients and flows
/// bound to it. Clients are cheap to create: they share the gateway's
/// connection pool.
///
/// # Example
///
/// ```ignore
/// let mut store = Storefront::new(&Config::load())?;
/// store.login("reader", "hunter2").await?;
///
/// let mut flow = store.checkout();
/// match flow.activate().await {
///     CheckoutState::Ready { session, cart_total } => { /* mount hosted form */ }
///     CheckoutState::Failed(message) => { /* show message */ }
///     CheckoutState::Loading => unreachable!("activate is terminal"),
/// }
/// ```
pub struct Storefront {
    gateway: HttpGateway,
}

impl Storefront {
    /// Builds the gateway from configuration, with no credential yet.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        info!(api_url = %config.api_url, "Storefront client ready");
        Ok(Self {
            gateway: HttpGateway::new(http, config.api_url.clone(), None),
        })
    }

    /// Binds an already-issued bearer token to all future clients and flows.
    pub fn authenticate(&mut self, token: BearerToken) {
        self.gateway = self.gateway.with_credential(token);
    }

    /// Logs in through the auth service and binds the issued token.
    ///
    /// Returns the authenticated user's id.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<u64, ApiError> {
        let outcome = self.auth().login(username, password).await?;
        self.authenticate(outcome.token);
        Ok(outcome.user_id)
    }

    /// The currently bound credential, if any.
    pub fn credential(&self) -> Option<&BearerToken> {
        self.gateway.credential()
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.gateway.clone())
    }

    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(self.gateway.clone())
    }

    pub fn cart(&self) -> CartClient {
        CartClient::new(self.gateway.clone())
    }

    pub fn addresses(&self) -> AddressClient {
        AddressClient::new(self.gateway.clone())
    }

    pub fn orders(&self) -> OrderClient {
        OrderClient::new(self.gateway.clone())
    }

    pub fn payments(&self) -> PaymentClient {
        PaymentClient::new(self.gateway.clone())
    }

    /// A fresh checkout activation bound to the current credential.
    pub fn checkout(&self) -> CheckoutFlow<CartClient, OrderClient, PaymentClient> {
        CheckoutFlow::new(
            self.credential().cloned(),
            self.cart(),
            self.orders(),
            self.payments(),
        )
    }

    /// A confirmation flow for a return URL from the hosted payment page.
    pub fn confirmation(&self, return_url: &str) -> ConfirmationFlow<PaymentClient> {
        ConfirmationFlow::from_return_url(return_url, self.payments())
    }
}
