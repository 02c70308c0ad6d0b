//! Checkout
//!
//! The checkout form collects the buyer's contact details. A form that passes
//! validation becomes an [`Order`], which is the only shape ever sent to the
//! vendor.

mod form;
mod order;
mod validation;

pub use form::{CheckoutForm, Field};
pub use order::{Customer, Order, OrderReceipt};
pub use validation::{ValidationErrors, ValidationIssue};
