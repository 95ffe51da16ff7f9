//! Client for the public book catalog.

use tracing::{debug, instrument};

use crate::model::Book;
use crate::transport::{ApiError, HttpGateway};

/// Client for browsing the catalog. The listing endpoint is public, so no
/// credential is attached.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    gateway: HttpGateway,
}

impl CatalogClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Lists a page of books.
    ///
    /// Pagination is keyset-style: pass 0 for the first page, then the last
    /// book id of the previous page.
    #[instrument(skip(self))]
    pub async fn books(&self, prev_page_last_book_id: u64) -> Result<Vec<Book>, ApiError> {
        debug!("Sending request");
        self.gateway
            .send_json(
                self.gateway
                    .get("/book")
                    .query(&[("prevPageLastBookId", prev_page_last_book_id)]),
            )
            .await
    }
}
