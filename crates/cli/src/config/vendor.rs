//! Vendor Config

use clap::Args;
use storefront_app::config::{DEFAULT_BASE_URL, VendorConfig};

/// Vendor API settings.
#[derive(Debug, Args)]
pub(crate) struct VendorArgs {
    /// Vendor API base URL
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Storefront path segment assigned by the vendor
    #[arg(long, env = "STOREFRONT_API_PATH")]
    pub api_path: String,
}

impl VendorArgs {
    pub(crate) fn to_config(&self) -> VendorConfig {
        VendorConfig::new(self.base_url.clone(), self.api_path.clone())
    }
}
