//! Client for the cart service.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::clients::traits::Carts;
use crate::model::CartLine;
use crate::transport::{ApiError, HttpGateway};

/// Client for the authenticated shopper's cart.
#[derive(Debug, Clone)]
pub struct CartClient {
    gateway: HttpGateway,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCart {
    book_id: u64,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct SetQuantity {
    quantity: u32,
}

impl CartClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Puts `quantity` copies of a book into the cart.
    #[instrument(skip(self))]
    pub async fn add(&self, book_id: u64, quantity: u32) -> Result<(), ApiError> {
        debug!("Sending request");
        self.gateway
            .send_ok(
                self.gateway
                    .post_auth("/cart")
                    .json(&AddToCart { book_id, quantity }),
            )
            .await
    }

    /// Replaces the quantity of an existing cart line.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, cart_item_id: u64, quantity: u32) -> Result<(), ApiError> {
        debug!("Sending request");
        self.gateway
            .send_ok(
                self.gateway
                    .put_auth(&format!("/cart/{cart_item_id}"))
                    .json(&SetQuantity { quantity }),
            )
            .await
    }

    /// Removes a line from the cart.
    #[instrument(skip(self))]
    pub async fn remove(&self, cart_item_id: u64) -> Result<(), ApiError> {
        debug!("Sending request");
        self.gateway
            .send_ok(self.gateway.delete_auth(&format!("/cart/{cart_item_id}")))
            .await
    }
}

#[async_trait]
impl Carts for CartClient {
    #[instrument(skip(self))]
    async fn fetch_cart(&self) -> Result<Vec<CartLine>, ApiError> {
        debug!("Sending request");
        self.gateway.send_json(self.gateway.get_auth("/cart")).await
    }
}
