//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use storefront::products::Product;
use tracing::debug;

use crate::{domain::products::errors::CatalogError, vendor::VendorApi};

#[derive(Clone)]
pub struct VendorProductsService {
    api: Arc<dyn VendorApi>,
}

impl VendorProductsService {
    #[must_use]
    pub fn new(api: Arc<dyn VendorApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ProductsService for VendorProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.api.list_products().await?;

        debug!(count = products.len(), "listed products");

        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        match self.api.get_product(id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(CatalogError::NotFound),
            Err(error) if error.is_not_found() => Err(CatalogError::NotFound),
            Err(error) => Err(CatalogError::Fetch(error)),
        }
    }
}

#[automock]
#[async_trait(?Send)]
pub trait ProductsService: Send + Sync {
    /// List the catalog in vendor order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: &str) -> Result<Product, CatalogError>;
}
