//! App Context

use std::sync::Arc;

use crate::{
    config::VendorConfig,
    domain::{
        carts::{CartsService, VendorCartsService},
        orders::{OrdersService, VendorOrdersService},
        products::{ProductsService, VendorProductsService},
    },
    vendor::{HttpVendorApi, VendorApi},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context against the configured vendor.
    #[must_use]
    pub fn from_config(config: VendorConfig) -> Self {
        Self::from_api(Arc::new(HttpVendorApi::new(config)))
    }

    /// Build application context over any vendor implementation.
    #[must_use]
    pub fn from_api(api: Arc<dyn VendorApi>) -> Self {
        Self {
            products: Arc::new(VendorProductsService::new(Arc::clone(&api))),
            carts: Arc::new(VendorCartsService::new(Arc::clone(&api))),
            orders: Arc::new(VendorOrdersService::new(api)),
        }
    }
}
