//! Client for the order service.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::traits::Orders;
use crate::model::OrderRecord;
use crate::transport::{ApiError, HttpGateway};

/// Client for the authenticated shopper's orders.
#[derive(Debug, Clone)]
pub struct OrderClient {
    gateway: HttpGateway,
}

impl OrderClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Lists past orders, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<OrderRecord>, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json(self.gateway.get_auth("/orders"))
            .await
    }
}

#[async_trait]
impl Orders for OrderClient {
    #[instrument(skip(self))]
    async fn create_order_from_cart(&self) -> Result<u64, ApiError> {
        debug!("Sending request");
        // The endpoint responds with the bare order id as a JSON number.
        self.gateway
            .send_json(self.gateway.post_auth("/orders/create-from-cart"))
            .await
    }
}
