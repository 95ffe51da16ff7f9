//! Client for the address book service.

use tracing::{debug, instrument};

use crate::model::{Address, AddressDraft};
use crate::transport::{ApiError, HttpGateway};

/// Client for the authenticated shopper's saved addresses.
#[derive(Debug, Clone)]
pub struct AddressClient {
    gateway: HttpGateway,
}

impl AddressClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Lists every saved address.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Address>, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json(self.gateway.get_auth("/address"))
            .await
    }

    /// The shopper's default address, if one has been chosen.
    #[instrument(skip(self))]
    pub async fn default_address(&self) -> Result<Option<Address>, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json_opt(self.gateway.get_auth("/address/default"))
            .await
    }

    /// Saves a new address and returns the stored record.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: &AddressDraft) -> Result<Address, ApiError> {
        debug!(?draft, "create called");
        self.gateway
            .send_json(self.gateway.post_auth("/address").json(draft))
            .await
    }

    /// Replaces an existing address.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, address_id: u64, draft: &AddressDraft) -> Result<(), ApiError> {
        debug!(?draft, "update called");
        self.gateway
            .send_ok(
                self.gateway
                    .put_auth(&format!("/address/{address_id}"))
                    .json(draft),
            )
            .await
    }

    /// Deletes an address.
    #[instrument(skip(self))]
    pub async fn delete(&self, address_id: u64) -> Result<(), ApiError> {
        debug!("Sending request");
        self.gateway
            .send_ok(self.gateway.delete_auth(&format!("/address/{address_id}")))
            .await
    }

    /// Marks an address as the default for checkout.
    #[instrument(skip(self))]
    pub async fn set_default(&self, address_id: u64) -> Result<(), ApiError> {
        debug!("Sending request");
        self.gateway
            .send_ok(
                self.gateway
                    .patch_auth(&format!("/address/{address_id}/set-default")),
            )
            .await
    }
}
