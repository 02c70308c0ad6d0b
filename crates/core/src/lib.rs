//! Storefront
//!
//! Domain types for a storefront backed by a vendor REST API: the product
//! catalog, the server-owned cart, quantities, price display and the checkout
//! form with its validation rules.

pub mod carts;
pub mod checkout;
pub mod money;
pub mod products;
pub mod quantity;
pub mod text;

pub mod prelude;
