//! Cart lines and the cart total computation.

use serde::{Deserialize, Serialize};

/// One line of the shopper's cart, as returned by the cart service.
///
/// The gateway joins book and author fields into the line, so a cart fetch
/// is enough to render and price the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_item_id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    pub book_id: u64,
    /// Wire name kept from the gateway contract.
    #[serde(rename = "bookQuantity")]
    pub quantity: u32,
    pub author_id: u64,
    pub title: String,
    /// Missing for titles that are not yet priced; treated as zero in totals.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CartLine {
    /// Creates a line with just the fields that drive checkout.
    pub fn new(book_id: u64, title: impl Into<String>, price: Option<f64>, quantity: u32) -> Self {
        Self {
            cart_item_id: 0,
            user_id: None,
            book_id,
            quantity,
            author_id: 0,
            title: title.into(),
            price,
            description: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Sums the cart at full float precision.
///
/// Unpriced lines count as zero. Display rounding is the caller's concern.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .map(|line| line.price.unwrap_or(0.0) * f64::from(line.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_treats_missing_price_as_zero() {
        let lines = vec![
            CartLine::new(1, "Priced", Some(10.0), 2),
            CartLine::new(2, "Unpriced", None, 3),
        ];
        assert_eq!(cart_total(&lines), 20.0);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn total_scales_with_quantity() {
        let lines = vec![CartLine::new(7, "Boxed Set", Some(12.5), 4)];
        assert_eq!(cart_total(&lines), 50.0);
    }

    #[test]
    fn cart_line_decodes_gateway_shape() {
        let line: CartLine = serde_json::from_str(
            r#"{
                "cartItemId": 9,
                "bookId": 1,
                "bookQuantity": 2,
                "authorId": 4,
                "title": "The Forgotten Chronicles",
                "price": 15.0
            }"#,
        )
        .expect("cart line should decode");
        assert_eq!(line.cart_item_id, 9);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, Some(15.0));
    }
}
