use std::time::Duration;

use reqwest::{Client, RequestBuilder};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for the storefront backend.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl StorefrontClient {
    /// Fails when the HTTP client cannot be built (for example, no TLS backend).
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Returns the cart items endpoint URL.
    pub fn cart_items_url(&self) -> String {
        format!("{}/api/cart/items", self.base_url)
    }

    /// Adds the request timeout and, when one is configured, the bearer token.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.timeout(REQUEST_TIMEOUT);
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}
