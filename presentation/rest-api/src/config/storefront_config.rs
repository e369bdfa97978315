use std::env;

/// Configuration for the storefront backend that owns the cart.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - STOREFRONT_API_URL: Base URL (default: "http://localhost:3000")
    /// - STOREFRONT_API_KEY: Optional bearer token
    pub fn from_env() -> Self {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let api_key = env::var("STOREFRONT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        Self { base_url, api_key }
    }
}
