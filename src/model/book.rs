//! Catalog book records.

use serde::{Deserialize, Serialize};

/// A book in the store catalog, joined with its author fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: Option<u64>,
    pub author_id: u64,
    pub title: String,
    /// Missing for titles that are not yet priced.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}
