use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::services::{CartError, CartService};

use crate::client::StorefrontClient;

/// Cart adapter posting moved items to the storefront cart endpoint.
pub struct CartServiceHttp {
    client: StorefrontClient,
}

impl CartServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    fn build_body(item: &WishlistItem) -> Value {
        json!({
            "productId": item.id.as_str(),
            "name": item.name,
            "price": item.price.to_string(),
            "image": item.image,
            "slug": item.slug,
            "quantity": 1,
        })
    }
}

#[async_trait]
impl CartService for CartServiceHttp {
    async fn add_item(&self, item: &WishlistItem) -> Result<(), CartError> {
        let url = self.client.cart_items_url();
        let request = self
            .client
            .authorize(self.client.client.post(&url))
            .json(&Self::build_body(item));

        let response = request.send().await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "cart request failed");
            CartError::Unavailable
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "cart rejected item");
            return Err(CartError::Rejected);
        }

        tracing::debug!(product_id = %item.id, "item handed to cart");
        Ok(())
    }
}
