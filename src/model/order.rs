//! Order history records.

use serde::{Deserialize, Serialize};

/// A past order, as returned by the order history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: u64,
    #[serde(default)]
    pub order_date: Option<String>,
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub books: Vec<OrderedBook>,
}

/// One purchased title within an [`OrderRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedBook {
    pub book_id: u64,
    pub title: String,
    pub quantity: u32,
    pub price: f64,
}
