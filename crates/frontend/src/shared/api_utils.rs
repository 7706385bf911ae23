//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::PageConfig;

/// Get the base URL for API requests
///
/// # Returns
/// - `config.api_base` without a trailing slash, e.g. "https://example.com"
/// - Empty string for same-origin requests
pub fn api_base(config: &PageConfig) -> String {
    config.api_base.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(config: &PageConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

/// URL of the product info endpoint for `product_id`
///
/// # Example
/// ```rust
/// use frontend::shared::{api_utils::product_url, config::PageConfig};
/// let url = product_url(&PageConfig::default(), "42");
/// assert_eq!(url, "/api/producto/42");
/// ```
pub fn product_url(config: &PageConfig, product_id: &str) -> String {
    let path = format!(
        "{}/{}",
        config.product_endpoint.trim_end_matches('/'),
        urlencoding::encode(product_id)
    );
    api_url(config, &path)
}
