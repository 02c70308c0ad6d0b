//! Orders

use serde::{Deserialize, Serialize};

/// Recipient contact details, sent as the order's `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Contact email
    pub email: String,

    /// Recipient name
    pub name: String,

    /// Recipient phone number
    pub tel: String,

    /// Delivery address
    pub address: String,
}

/// Validated order for the current server-side cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Recipient
    pub user: Customer,

    /// Note to the seller, possibly empty
    pub message: String,
}

/// Vendor acknowledgement of a placed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Order identifier, when the vendor returns one
    #[serde(default, rename = "orderId")]
    pub order_id: Option<String>,
}
