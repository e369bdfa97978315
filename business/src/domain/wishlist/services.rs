use async_trait::async_trait;

use super::model::WishlistItem;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.unavailable")]
    Unavailable,
    #[error("cart.rejected")]
    Rejected,
}

/// Service port for the shopping cart that saved items are moved into.
///
/// The cart is owned by another component; the wishlist only hands items
/// over and never reads the cart back.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_item(&self, item: &WishlistItem) -> Result<(), CartError>;
}
