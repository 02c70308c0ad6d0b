//! Orders

pub mod checkout;
pub mod errors;
pub mod service;

pub use checkout::{Checkout, CheckoutPhase};
pub use errors::{CheckoutError, OrdersServiceError};
pub use service::*;
