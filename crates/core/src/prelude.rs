//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{Cart, CartItem},
    checkout::{
        CheckoutForm, Customer, Field, Order, OrderReceipt, ValidationErrors, ValidationIssue,
    },
    money::format_price,
    products::Product,
    quantity::{QUANTITY_CHOICES, Quantity, QuantityError, QuantityUpdate},
    text::{DEFAULT_SHOW_MORE_LIMIT, ShowMore, section_fallback},
};
