//! Carts
//!
//! The cart is owned by the vendor. These types mirror the vendor's cart
//! payload and are never recomputed locally: line totals and the grand total
//! always come from the server.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Cart line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart line identifier
    pub id: String,

    /// Referenced product identifier, when the vendor sends it separately
    #[serde(default)]
    pub product_id: String,

    /// Units on this line
    pub qty: u32,

    /// Server-computed line total
    #[serde(default)]
    pub total: Decimal,

    /// Server-computed line total after discounts
    #[serde(default)]
    pub final_total: Decimal,

    /// Embedded product snapshot
    pub product: Product,
}

impl CartItem {
    /// The referenced product identifier.
    ///
    /// Falls back to the embedded product when `product_id` was not sent.
    pub fn product_ref(&self) -> &str {
        if self.product_id.is_empty() {
            &self.product.id
        } else {
            &self.product_id
        }
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in server order
    #[serde(default, rename = "carts")]
    pub items: Vec<CartItem>,

    /// Server-computed grand total
    #[serde(default)]
    pub total: Decimal,

    /// Server-computed grand total after discounts
    #[serde(default)]
    pub final_total: Decimal,
}

impl Cart {
    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Look up a line by its identifier.
    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
