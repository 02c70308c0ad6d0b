//! Carts service.
//!
//! Every mutation is followed by a full refetch, and the refetched cart is
//! what the mutation returns. Nothing is merged locally.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    carts::Cart,
    quantity::{Quantity, QuantityUpdate},
};
use tracing::debug;

use crate::{domain::carts::errors::CartsServiceError, vendor::VendorApi};

#[derive(Clone)]
pub struct VendorCartsService {
    api: Arc<dyn VendorApi>,
}

impl VendorCartsService {
    #[must_use]
    pub fn new(api: Arc<dyn VendorApi>) -> Self {
        Self { api }
    }

    async fn refresh(&self) -> Result<Cart, CartsServiceError> {
        self.api.get_cart().await.map_err(CartsServiceError::Fetch)
    }
}

#[async_trait(?Send)]
impl CartsService for VendorCartsService {
    async fn get_cart(&self) -> Result<Cart, CartsServiceError> {
        self.refresh().await
    }

    async fn add_item(&self, product_id: &str, qty: Quantity) -> Result<Cart, CartsServiceError> {
        self.api
            .add_to_cart(product_id, qty)
            .await
            .map_err(CartsServiceError::Mutation)?;

        self.refresh().await
    }

    async fn update_item_quantity(
        &self,
        item_id: &str,
        product_id: &str,
        qty: u32,
    ) -> Result<Cart, CartsServiceError> {
        let qty = match QuantityUpdate::from(qty) {
            QuantityUpdate::Set(qty) => qty,
            QuantityUpdate::Remove => {
                debug!(item_id, "quantity resolved to zero, removing line");

                return self.remove_item(item_id).await;
            }
        };

        self.api
            .update_cart_item(item_id, product_id, qty)
            .await
            .map_err(CartsServiceError::Mutation)?;

        self.refresh().await
    }

    async fn remove_item(&self, item_id: &str) -> Result<Cart, CartsServiceError> {
        self.api
            .remove_cart_item(item_id)
            .await
            .map_err(CartsServiceError::Mutation)?;

        self.refresh().await
    }

    async fn clear_cart(&self) -> Result<Cart, CartsServiceError> {
        self.api
            .clear_cart()
            .await
            .map_err(CartsServiceError::Mutation)?;

        self.refresh().await
    }
}

#[automock]
#[async_trait(?Send)]
pub trait CartsService: Send + Sync {
    /// Retrieve the current cart.
    async fn get_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Add units of a product, then return the refreshed cart.
    async fn add_item(&self, product_id: &str, qty: Quantity) -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity, then return the refreshed cart.
    ///
    /// A quantity of zero removes the line instead.
    async fn update_item_quantity(
        &self,
        item_id: &str,
        product_id: &str,
        qty: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove one line, then return the refreshed cart.
    async fn remove_item(&self, item_id: &str) -> Result<Cart, CartsServiceError>;

    /// Remove every line, then return the refreshed cart.
    async fn clear_cart(&self) -> Result<Cart, CartsServiceError>;
}
