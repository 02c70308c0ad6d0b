//! Build-time vendor settings.

use storefront_app::config::{DEFAULT_BASE_URL, VendorConfig};

/// Vendor settings baked in from `STOREFRONT_BASE_URL` and
/// `STOREFRONT_API_PATH` when the app was compiled.
pub(crate) fn vendor_config() -> VendorConfig {
    VendorConfig::new(
        option_env!("STOREFRONT_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
        option_env!("STOREFRONT_API_PATH").unwrap_or_default(),
    )
}
