//! Vendor API configuration

/// Default vendor API host.
pub const DEFAULT_BASE_URL: &str = "https://ec-course-api.hexschool.io/v2";

/// Where the vendor API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorConfig {
    /// Vendor server address, e.g. `"https://ec-course-api.hexschool.io/v2"`.
    pub base_url: String,

    /// Storefront path segment assigned by the vendor.
    pub api_path: String,
}

impl VendorConfig {
    /// Create a configuration for the given base URL and API path.
    pub fn new(base_url: impl Into<String>, api_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: api_path.into(),
        }
    }

    /// Full URL of an endpoint under `{base_url}/api/{api_path}`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_path_and_resource() {
        let config = VendorConfig::new(DEFAULT_BASE_URL, "tea-shop");

        assert_eq!(
            config.endpoint("cart/c1"),
            "https://ec-course-api.hexschool.io/v2/api/tea-shop/cart/c1"
        );
    }

    #[test]
    fn endpoint_tolerates_stray_slashes() {
        let config = VendorConfig::new("http://localhost:3000/", "/tea-shop/");

        assert_eq!(
            config.endpoint("/products"),
            "http://localhost:3000/api/tea-shop/products"
        );
    }
}
