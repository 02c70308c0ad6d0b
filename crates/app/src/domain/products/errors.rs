//! Catalog errors.

use thiserror::Error;

use crate::vendor::VendorError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("failed to fetch products")]
    Fetch(#[source] VendorError),
}

impl From<VendorError> for CatalogError {
    fn from(error: VendorError) -> Self {
        Self::Fetch(error)
    }
}
