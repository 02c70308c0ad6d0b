//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use storefront::checkout::{Order, OrderReceipt};
use tracing::debug;

use crate::{domain::orders::errors::OrdersServiceError, vendor::VendorApi};

#[derive(Clone)]
pub struct VendorOrdersService {
    api: Arc<dyn VendorApi>,
}

impl VendorOrdersService {
    #[must_use]
    pub fn new(api: Arc<dyn VendorApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl OrdersService for VendorOrdersService {
    async fn submit_order(&self, order: &Order) -> Result<OrderReceipt, OrdersServiceError> {
        let receipt = self.api.submit_order(order).await?;

        debug!(order_id = ?receipt.order_id, "order placed");

        Ok(receipt)
    }
}

#[automock]
#[async_trait(?Send)]
pub trait OrdersService: Send + Sync {
    /// Place an order for the current server-side cart.
    async fn submit_order(&self, order: &Order) -> Result<OrderReceipt, OrdersServiceError>;
}
